use approx::assert_relative_eq;
use time_slider::core::{Breakpoints, DAY, DEFAULT_STEPS, HOUR, MINUTE, PiecewiseScale};

fn short_scale() -> PiecewiseScale {
    PiecewiseScale::new(&Breakpoints::new([0, 60, 1800]).expect("valid steps"))
}

#[test]
fn breakpoints_are_spread_evenly_over_the_domain() {
    let scale = short_scale();
    assert_eq!(scale.domain(), &[0.0, 0.5, 1.0]);
    assert_eq!(scale.range(), &[0.0, 60.0, 1800.0]);
}

#[test]
fn default_steps_cover_now_to_thirty_days() {
    let scale = PiecewiseScale::new(&Breakpoints::default());
    assert_eq!(DEFAULT_STEPS.len(), 10);
    assert_eq!(scale.min_value(), 0.0);
    assert_eq!(scale.max_value(), (30 * DAY) as f64);

    for (index, step) in DEFAULT_STEPS.iter().enumerate() {
        let expected = index as f64 / 9.0;
        assert_relative_eq!(scale.value_to_position(*step as f64), expected, epsilon = 1e-12);
    }
}

#[test]
fn interpolates_linearly_inside_a_segment() {
    let scale = short_scale();
    assert_relative_eq!(scale.position_to_value(0.25), 30.0, epsilon = 1e-9);
    assert_relative_eq!(scale.position_to_value(0.75), 930.0, epsilon = 1e-9);
    assert_relative_eq!(scale.value_to_position(930.0), 0.75, epsilon = 1e-12);
}

#[test]
fn out_of_range_inputs_are_clamped() {
    let scale = short_scale();
    assert_eq!(scale.position_to_value(-0.5), 0.0);
    assert_eq!(scale.position_to_value(3.0), 1800.0);
    assert_eq!(scale.value_to_position(-100.0), 0.0);
    assert_eq!(scale.value_to_position(1_000_000.0), 1.0);
    assert_eq!(scale.position_to_value(f64::NAN), 0.0);
}

#[test]
fn axis_range_is_reversed_pixel_offsets() {
    let scale = short_scale();
    assert_eq!(scale.axis_range(200.0), vec![200.0, 100.0, 0.0]);
}

#[test]
fn offsets_run_right_to_left_in_time() {
    let scale = short_scale();
    assert_eq!(scale.value_to_offset(0.0, 200.0), 200.0);
    assert_eq!(scale.value_to_offset(1800.0, 200.0), 0.0);
    assert_eq!(scale.offset_to_value(100.0, 200.0), 60.0);
    assert_eq!(scale.offset_to_value(-20.0, 200.0), 1800.0);
    assert_eq!(scale.offset_to_value(250.0, 200.0), 0.0);
}

#[test]
fn exact_breakpoint_round_trip_on_default_track() {
    let scale = PiecewiseScale::new(&Breakpoints::default());
    for step in [10 * MINUTE, HOUR, 12 * HOUR, 7 * DAY] {
        let step = step as f64;
        let back = scale.position_to_value(scale.value_to_position(step));
        assert_relative_eq!(back, step, max_relative = 1e-9);
    }
}
