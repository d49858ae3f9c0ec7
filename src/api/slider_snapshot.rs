use serde::{Deserialize, Serialize};

use crate::core::SliderValue;
use crate::error::{SliderError, SliderResult};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::TimeSlider;

/// Serializable slider state used by regression tests and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSnapshot {
    pub value: SliderValue,
    pub track_width: f64,
    pub min_interval_seconds: f64,
    pub breakpoints: Vec<u64>,
    pub interaction_mode: InteractionMode,
    pub from_offset: f64,
    pub until_offset: f64,
}

impl<R: Renderer> TimeSlider<R> {
    #[must_use]
    pub fn snapshot(&self) -> SliderSnapshot {
        let offsets = self.handle_offsets();
        SliderSnapshot {
            value: self.value(),
            track_width: self.track_width,
            min_interval_seconds: self.model.min_interval(),
            breakpoints: self.breakpoints.as_slice().to_vec(),
            interaction_mode: self.interaction.mode(),
            from_offset: offsets.from,
            until_offset: offsets.until,
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
