mod frame_builder;
mod interaction_controller;
mod label_format;
mod slider;
mod slider_config;
mod slider_snapshot;
mod validation;

pub use interaction_controller::EventOutcome;
pub use label_format::{format_seconds_ago, format_tick_label, seconds_ago_to_datetime};
pub use slider::{ChangeCallback, TimeSlider};
pub use slider_config::TimeSliderConfig;
pub use slider_snapshot::SliderSnapshot;
