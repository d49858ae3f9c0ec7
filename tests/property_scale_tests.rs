use std::collections::BTreeSet;

use proptest::prelude::*;
use time_slider::core::{Breakpoints, PiecewiseScale};

fn custom_scale(steps: BTreeSet<u64>) -> PiecewiseScale {
    let breakpoints =
        Breakpoints::new(std::iter::once(0).chain(steps)).expect("generated steps are valid");
    PiecewiseScale::new(&breakpoints)
}

proptest! {
    #[test]
    fn value_round_trip_property(value in 0.0f64..2_592_000.0) {
        let scale = PiecewiseScale::new(&Breakpoints::default());
        let back = scale.position_to_value(scale.value_to_position(value));
        prop_assert!((back - value).abs() <= 1e-6 * value.max(1.0));
    }

    #[test]
    fn position_round_trip_property(position in 0.0f64..=1.0) {
        let scale = PiecewiseScale::new(&Breakpoints::default());
        let back = scale.value_to_position(scale.position_to_value(position));
        prop_assert!((back - position).abs() <= 1e-9);
    }

    #[test]
    fn position_is_monotonic_in_value(
        steps in prop::collection::btree_set(1u64..10_000_000, 1..12),
        a in 0.0f64..10_000_000.0,
        b in 0.0f64..10_000_000.0,
    ) {
        let scale = custom_scale(steps);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_position = scale.value_to_position(low);
        let high_position = scale.value_to_position(high);
        prop_assert!(low_position <= high_position);
        prop_assert!((0.0..=1.0).contains(&low_position));
        prop_assert!((0.0..=1.0).contains(&high_position));

        // Handles drawn further left are older.
        prop_assert!(scale.value_to_offset(low, 500.0) >= scale.value_to_offset(high, 500.0));
    }

    #[test]
    fn custom_breakpoints_round_trip(
        steps in prop::collection::btree_set(1u64..10_000_000, 1..12),
        factor in 0.0f64..=1.0,
    ) {
        let scale = custom_scale(steps);
        let value = factor * scale.max_value();
        let back = scale.position_to_value(scale.value_to_position(value));
        prop_assert!((back - value).abs() <= 1e-6 * value.max(1.0));
    }
}
