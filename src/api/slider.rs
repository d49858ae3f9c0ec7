use tracing::{debug, warn};

use crate::core::{Breakpoints, Handle, PiecewiseScale, SliderValue, ValueModel};
use crate::error::SliderResult;
use crate::interaction::{HandleOffsets, InteractionMode, InteractionState};
use crate::render::Renderer;

use super::TimeSliderConfig;
use super::validation::{validate_slider_config, validate_track_width};

/// Observer invoked with the committed value at the end of a click or drag.
pub type ChangeCallback = Box<dyn FnMut(SliderValue)>;

/// Dual-handle seconds-ago range slider.
///
/// `TimeSlider` owns the scale, the value model and the interaction state of
/// one slider instance. Pointer events come in through the methods in
/// `interaction_controller`; the renderer is redrawn after every visible
/// change and the change callback fires only at commit points.
pub struct TimeSlider<R: Renderer> {
    pub(super) renderer: R,
    pub(super) breakpoints: Breakpoints,
    pub(super) scale: PiecewiseScale,
    pub(super) model: ValueModel,
    pub(super) interaction: InteractionState,
    pub(super) track_width: f64,
    pub(super) pending_track_width: Option<f64>,
    pub(super) on_change: Option<ChangeCallback>,
}

impl<R: Renderer> TimeSlider<R> {
    /// Creates a slider and draws its initial frame.
    pub fn new(renderer: R, config: TimeSliderConfig) -> SliderResult<Self> {
        validate_slider_config(&config)?;

        let scale = PiecewiseScale::new(&config.breakpoints);
        let initial = config.resolved_initial_value();
        debug!(
            steps = config.breakpoints.len(),
            from = initial.from,
            until = initial.until,
            track_width = config.track_width,
            "time slider created"
        );

        let mut slider = Self {
            renderer,
            scale,
            model: ValueModel::new(initial, config.min_interval_seconds),
            interaction: InteractionState::new(config.handle_selection),
            track_width: config.track_width,
            pending_track_width: None,
            on_change: None,
            breakpoints: config.breakpoints,
        };
        slider.render()?;
        Ok(slider)
    }

    #[must_use]
    pub fn value(&self) -> SliderValue {
        self.model.get()
    }

    /// Overwrites the value without checking the minimum interval and redraws.
    pub fn set_value(&mut self, value: SliderValue) -> &mut Self {
        self.model.set(value);
        self.refresh();
        self
    }

    /// Overwrites the value only when it respects the minimum interval.
    pub fn try_set_value(&mut self, value: SliderValue) -> SliderResult<&mut Self> {
        self.model.try_set(value)?;
        self.refresh();
        Ok(self)
    }

    /// Registers the change observer, replacing any previous one.
    pub fn on_change<F>(&mut self, callback: F) -> &mut Self
    where
        F: FnMut(SliderValue) + 'static,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn clear_on_change(&mut self) -> &mut Self {
        self.on_change = None;
        self
    }

    #[must_use]
    pub fn scale(&self) -> &PiecewiseScale {
        &self.scale
    }

    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    #[must_use]
    pub fn min_interval_seconds(&self) -> f64 {
        self.model.min_interval()
    }

    #[must_use]
    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        self.interaction.mode().active_handle()
    }

    /// Left pixel offsets of both handles for the current value.
    #[must_use]
    pub fn handle_offsets(&self) -> HandleOffsets {
        let value = self.model.get();
        HandleOffsets {
            from: self.scale.value_to_offset(value.from, self.track_width),
            until: self.scale.value_to_offset(value.until, self.track_width),
        }
    }

    /// Seconds-ago under the hovering pointer, when hovering.
    #[must_use]
    pub fn hover_value(&self) -> Option<f64> {
        match (self.interaction.mode(), self.interaction.pointer_x()) {
            (InteractionMode::Hover(_), Some(x)) => {
                Some(self.scale.offset_to_value(x, self.track_width))
            }
            _ => None,
        }
    }

    /// Pixel offset of each breakpoint on the current track, oldest first.
    #[must_use]
    pub fn axis_range(&self) -> Vec<f64> {
        self.scale.axis_range(self.track_width)
    }

    /// Updates the track width.
    ///
    /// While a drag is in progress the new width is held back and applied at
    /// drag end, so one drag samples every position against the same geometry.
    pub fn resize(&mut self, track_width: f64) -> SliderResult<()> {
        let track_width = validate_track_width(track_width)?;
        if self.interaction.mode().is_dragging() {
            debug!(track_width, "resize deferred until drag end");
            self.pending_track_width = Some(track_width);
            return Ok(());
        }

        self.track_width = track_width;
        self.render()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn render(&mut self) -> SliderResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    pub(super) fn refresh(&mut self) {
        if let Err(err) = self.render() {
            warn!(error = %err, "skipping slider redraw");
        }
    }

    pub(super) fn apply_pending_resize(&mut self) {
        if let Some(track_width) = self.pending_track_width.take() {
            debug!(track_width, "applying deferred resize");
            self.track_width = track_width;
            self.refresh();
        }
    }

    pub(super) fn notify_change(&mut self) {
        let value = self.model.get();
        debug!(from = value.from, until = value.until, "slider value committed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(value);
        }
    }
}
