use crate::core::SliderValue;
use crate::error::{SliderError, SliderResult};

use super::TimeSliderConfig;

pub(super) fn validate_track_width(width: f64) -> SliderResult<f64> {
    if !width.is_finite() || width <= 0.0 {
        return Err(SliderError::InvalidTrackWidth { width });
    }
    Ok(width)
}

pub(super) fn validate_min_interval(min_interval: f64) -> SliderResult<f64> {
    if !min_interval.is_finite() || min_interval < 0.0 {
        return Err(SliderError::InvalidData(
            "minimum interval must be finite and >= 0".to_owned(),
        ));
    }
    Ok(min_interval)
}

pub(super) fn validate_pointer_x(x: f64) -> SliderResult<f64> {
    if !x.is_finite() {
        return Err(SliderError::InvalidData(
            "pointer offset must be finite".to_owned(),
        ));
    }
    Ok(x)
}

pub(super) fn validate_initial_value(
    value: SliderValue,
    min_interval: f64,
) -> SliderResult<SliderValue> {
    if !value.satisfies_min_interval(min_interval) {
        return Err(SliderError::IntervalTooSmall {
            from: value.from,
            until: value.until,
            min_interval,
        });
    }
    Ok(value)
}

pub(super) fn validate_slider_config(config: &TimeSliderConfig) -> SliderResult<()> {
    validate_track_width(config.track_width)?;
    validate_min_interval(config.min_interval_seconds)?;
    if let Some(initial) = config.initial_value {
        validate_initial_value(initial, config.min_interval_seconds)?;
    }
    Ok(())
}
