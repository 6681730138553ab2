//! Benchmarks for the per-frame transition path.
//!
//! Run with: `cargo bench -p gallery-motion`
//!
//! ## Benchmark Groups
//!
//! - `transform`: thumbnail-to-fullscreen transform calculation
//! - `choreography`: building and sampling open/close sequences
//! - `easing`: time curves and the settle spring

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gallery_motion::config::EasingType;
use gallery_motion::transition::easing::{CubicBezier, apply_easing};
use gallery_motion::transition::spring::SpringParams;
use gallery_motion::transition::{
    Choreography, MotionTimings, MotionValues, ScreenRect, Transform, Viewport,
    calculate_transform,
};

fn thumbnail() -> ScreenRect { ScreenRect::new(40.0, 200.0, 300.0, 300.0).unwrap_or_default() }

fn phone() -> Viewport { Viewport::new(1080.0, 2280.0) }

// ============================================================================
// Transform
// ============================================================================

fn bench_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");
    let bounds = thumbnail();
    let viewport = phone();

    for progress in [0.0_f32, 0.5, 1.0] {
        group.bench_with_input(BenchmarkId::new("calculate", progress), &progress, |b, &p| {
            b.iter(|| {
                calculate_transform(
                    black_box(bounds),
                    black_box(viewport),
                    black_box(p),
                    black_box(1.02),
                )
            });
        });
    }

    group.bench_function("apply", |b| {
        let transform = calculate_transform(bounds, viewport, 0.5, 1.0).unwrap_or(Transform::IDENTITY);
        b.iter(|| black_box(transform).apply(black_box(viewport)));
    });

    group.finish();
}

// ============================================================================
// Choreography
// ============================================================================

fn bench_choreography(c: &mut Criterion) {
    let mut group = c.benchmark_group("choreography");
    let timings = MotionTimings::default();
    let start = MotionValues::thumbnail(12.0);

    group.bench_function("build_open", |b| {
        b.iter(|| Choreography::open(black_box(start), black_box(&timings)));
    });

    group.bench_function("build_close", |b| {
        b.iter(|| {
            Choreography::close(black_box(MotionValues::FULLSCREEN), black_box(&timings), 12.0)
        });
    });

    let open = Choreography::open(start, &timings);
    for millis in [0_u64, 100, 250, 300, 350] {
        group.bench_with_input(BenchmarkId::new("sample_open", millis), &millis, |b, &ms| {
            b.iter(|| open.sample(black_box(Duration::from_millis(ms))));
        });
    }

    group.bench_function("frames_60fps", |b| {
        b.iter(|| open.frames(black_box(Duration::from_secs(1) / 60)));
    });

    group.finish();
}

// ============================================================================
// Easing
// ============================================================================

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");

    for easing in [EasingType::EaseOut, EasingType::EaseOutExpo, EasingType::FastOutSlowIn] {
        group.bench_with_input(
            BenchmarkId::new("apply", format!("{easing:?}")),
            &easing,
            |b, &easing| {
                b.iter(|| apply_easing(black_box(0.37), easing));
            },
        );
    }

    group.bench_function("cubic_bezier", |b| {
        b.iter(|| CubicBezier::FAST_OUT_SLOW_IN.transform(black_box(0.63)));
    });

    group.bench_function("spring_position", |b| {
        let spring = SpringParams::settling_within(Duration::from_millis(70), 0.75);
        b.iter(|| spring.position(black_box(0.035)));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(benches, bench_transform, bench_choreography, bench_easing);

criterion_main!(benches);
