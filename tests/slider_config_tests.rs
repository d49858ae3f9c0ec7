use time_slider::SliderError;
use time_slider::api::{TimeSlider, TimeSliderConfig};
use time_slider::core::{Breakpoints, DEFAULT_STEPS, SliderValue};
use time_slider::interaction::HandleSelection;
use time_slider::render::NullRenderer;

#[test]
fn minimal_json_uses_defaults() {
    let config = TimeSliderConfig::from_json_str(r#"{ "track_width": 640.0 }"#)
        .expect("minimal config parses");

    assert_eq!(config.track_width, 640.0);
    assert_eq!(config.breakpoints.as_slice(), &DEFAULT_STEPS);
    assert_eq!(config.min_interval_seconds, 60.0);
    assert_eq!(config.initial_value, None);
    assert_eq!(config.handle_selection, HandleSelection::LeftOfPointer);
    assert_eq!(config.resolved_initial_value(), SliderValue::new(3600.0, 0.0));
}

#[test]
fn json_breakpoints_are_validated() {
    let err = TimeSliderConfig::from_json_str(r#"{ "track_width": 640.0, "breakpoints": [60, 1800] }"#)
        .expect_err("breakpoints without 0 must fail");
    assert!(format!("{err}").contains("failed to parse config"));
}

#[test]
fn json_config_survives_serialization() {
    let config = TimeSliderConfig::new(320.0)
        .with_breakpoints(Breakpoints::new([0, 60, 1800]).expect("valid steps"))
        .with_min_interval_seconds(120.0)
        .with_handle_selection(HandleSelection::Nearest);

    let json = config.to_json_pretty().expect("serialize config");
    assert!(json.contains("\"Nearest\""));
    let parsed = TimeSliderConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn zero_width_track_is_rejected() {
    let result = TimeSlider::new(NullRenderer::default(), TimeSliderConfig::new(0.0));
    assert!(matches!(result, Err(SliderError::InvalidTrackWidth { .. })));
}

#[test]
fn initial_value_below_min_interval_is_rejected() {
    let config =
        TimeSliderConfig::new(500.0).with_initial_value(SliderValue::new(600.0, 590.0));
    let result = TimeSlider::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(SliderError::IntervalTooSmall { .. })));
}

#[test]
fn custom_min_interval_is_enforced() {
    let config = TimeSliderConfig::new(900.0).with_min_interval_seconds(3600.0);
    let mut slider = TimeSlider::new(NullRenderer::default(), config).expect("slider init");
    assert_eq!(slider.min_interval_seconds(), 3600.0);

    // 30 minutes ago is closer than one hour to `until = 0`.
    assert!(!slider.click(700.0).value_changed);
    // 4 hours ago is far enough.
    assert!(slider.click(500.0).value_changed);
}

#[test]
fn short_tracks_start_from_the_oldest_step() {
    let config = TimeSliderConfig::new(200.0)
        .with_breakpoints(Breakpoints::new([0, 60, 1800]).expect("valid steps"));
    let slider = TimeSlider::new(NullRenderer::default(), config).expect("slider init");
    assert_eq!(slider.value(), SliderValue::new(1800.0, 0.0));
}
