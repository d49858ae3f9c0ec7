use crate::interaction::InteractionMode;
use crate::render::{AxisTick, PointerTooltip, Renderer, SliderFrame};

use super::TimeSlider;
use super::label_format::format_tick_label;

impl<R: Renderer> TimeSlider<R> {
    /// Materializes the current state into a backend-agnostic frame.
    #[must_use]
    pub fn build_frame(&self) -> SliderFrame {
        let offsets = self.handle_offsets();

        let pointer_tooltip = match (self.interaction.mode(), self.interaction.pointer_x()) {
            (InteractionMode::Hover(_), Some(x)) => Some(PointerTooltip {
                offset: x,
                value: self.scale.offset_to_value(x, self.track_width),
            }),
            _ => None,
        };

        let ticks = self
            .scale
            .range()
            .iter()
            .map(|&value| AxisTick {
                offset: self.scale.value_to_offset(value, self.track_width),
                value,
                label: format_tick_label(value),
            })
            .collect();

        SliderFrame {
            track_width: self.track_width,
            value: self.model.get(),
            from_offset: offsets.from,
            until_offset: offsets.until,
            active_handle: self.interaction.mode().active_handle(),
            pointer_tooltip,
            ticks,
        }
    }
}
