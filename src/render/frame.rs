use serde::{Deserialize, Serialize};

use crate::core::{Handle, SliderValue};
use crate::error::{SliderError, SliderResult};

/// One labelled axis stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub offset: f64,
    pub value: f64,
    pub label: String,
}

/// Tentative value under a hovering pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerTooltip {
    pub offset: f64,
    pub value: f64,
}

/// Backend-agnostic description of one slider draw pass.
///
/// Offsets are pixels from the track's left edge. The slice spans
/// `from_offset..until_offset` since older times are drawn further left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderFrame {
    pub track_width: f64,
    pub value: SliderValue,
    pub from_offset: f64,
    pub until_offset: f64,
    pub active_handle: Option<Handle>,
    pub pointer_tooltip: Option<PointerTooltip>,
    pub ticks: Vec<AxisTick>,
}

impl SliderFrame {
    #[must_use]
    pub fn handle_offset(&self, handle: Handle) -> f64 {
        match handle {
            Handle::From => self.from_offset,
            Handle::Until => self.until_offset,
        }
    }

    #[must_use]
    pub fn slice_width(&self) -> f64 {
        self.until_offset - self.from_offset
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.track_width.is_finite() || self.track_width <= 0.0 {
            return Err(SliderError::InvalidTrackWidth {
                width: self.track_width,
            });
        }

        for (name, offset) in [("from", self.from_offset), ("until", self.until_offset)] {
            if !offset.is_finite() {
                return Err(SliderError::InvalidData(format!(
                    "{name} handle offset must be finite"
                )));
            }
        }
        if let Some(tooltip) = self.pointer_tooltip {
            if !tooltip.offset.is_finite() || !tooltip.value.is_finite() {
                return Err(SliderError::InvalidData(
                    "pointer tooltip must be finite".to_owned(),
                ));
            }
        }
        if self.ticks.iter().any(|tick| !tick.offset.is_finite()) {
            return Err(SliderError::InvalidData(
                "axis tick offsets must be finite".to_owned(),
            ));
        }

        Ok(())
    }
}
