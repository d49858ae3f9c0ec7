use serde::{Deserialize, Serialize};

use crate::core::{Breakpoints, DEFAULT_MIN_INTERVAL_SECONDS, SliderValue};
use crate::error::{SliderError, SliderResult};
use crate::interaction::HandleSelection;

/// Public slider bootstrap configuration.
///
/// Fixed at construction; serializable so hosts can keep slider setup in
/// config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSliderConfig {
    pub track_width: f64,
    #[serde(default)]
    pub breakpoints: Breakpoints,
    #[serde(default = "default_min_interval_seconds")]
    pub min_interval_seconds: f64,
    /// Overrides the default `{from: steps[3], until: 0}` start value.
    #[serde(default)]
    pub initial_value: Option<SliderValue>,
    #[serde(default)]
    pub handle_selection: HandleSelection,
}

impl TimeSliderConfig {
    /// Creates a config with default breakpoints and a one-minute minimum interval.
    #[must_use]
    pub fn new(track_width: f64) -> Self {
        Self {
            track_width,
            breakpoints: Breakpoints::default(),
            min_interval_seconds: default_min_interval_seconds(),
            initial_value: None,
            handle_selection: HandleSelection::default(),
        }
    }

    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    #[must_use]
    pub fn with_min_interval_seconds(mut self, min_interval_seconds: f64) -> Self {
        self.min_interval_seconds = min_interval_seconds;
        self
    }

    #[must_use]
    pub fn with_initial_value(mut self, value: SliderValue) -> Self {
        self.initial_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_handle_selection(mut self, selection: HandleSelection) -> Self {
        self.handle_selection = selection;
        self
    }

    /// Start value: the configured one, else `{from: steps[3], until: 0}`.
    #[must_use]
    pub fn resolved_initial_value(&self) -> SliderValue {
        self.initial_value.unwrap_or_else(|| {
            SliderValue::new(
                self.breakpoints.default_from() as f64,
                self.breakpoints.as_slice()[0] as f64,
            )
        })
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> SliderResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SliderError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> SliderResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| SliderError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_min_interval_seconds() -> f64 {
    DEFAULT_MIN_INTERVAL_SECONDS
}
