use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use time_slider::api::{TimeSlider, TimeSliderConfig};
use time_slider::core::{Breakpoints, PiecewiseScale};
use time_slider::interaction::PointerTarget;
use time_slider::render::NullRenderer;

fn bench_piecewise_scale_round_trip(c: &mut Criterion) {
    let scale = PiecewiseScale::new(&Breakpoints::default());

    c.bench_function("piecewise_scale_round_trip", |b| {
        b.iter(|| {
            let position = scale.value_to_position(black_box(54_321.0));
            let _ = scale.position_to_value(black_box(position));
        })
    });
}

fn bench_drag_session_1k_moves(c: &mut Criterion) {
    c.bench_function("drag_session_1k_moves", |b| {
        b.iter(|| {
            let mut slider =
                TimeSlider::new(NullRenderer::default(), TimeSliderConfig::new(1_000.0))
                    .expect("slider init");
            slider.drag_start(PointerTarget::FromHandle);
            for step in 0..1_000 {
                slider.drag(black_box(f64::from(step) * 0.9));
            }
            slider.drag_end();
        })
    });
}

criterion_group!(
    benches,
    bench_piecewise_scale_round_trip,
    bench_drag_session_1k_moves
);
criterion_main!(benches);
