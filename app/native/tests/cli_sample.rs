//! Integration tests for the deterministic `sample` rendering path.

use std::time::Duration;

use gallery_motion::cli::{render_frames_table, sample_transition};
use gallery_motion::config::MotionConfig;
use gallery_motion::transition::{
    MotionTimings, MotionValues, OpenRequest, ScreenRect, TransitionPhase, Viewport,
    calculate_transform,
};

fn scenario() -> OpenRequest {
    OpenRequest::new(
        ScreenRect::new(40.0, 200.0, 300.0, 300.0).ok(),
        Viewport::new(1080.0, 2280.0),
        12.0,
    )
}

#[test]
fn test_scenario_transform_values() {
    let request = scenario();
    let bounds = request.bounds.unwrap();

    let start = calculate_transform(bounds, request.viewport, 0.0, 1.0).unwrap();
    assert!((start.translation_x - 40.0).abs() < 1e-4);
    assert!((start.translation_y - 200.0).abs() < 1e-4);
    assert!((start.scale_x - 0.2778).abs() < 1e-4);
    assert!((start.scale_y - 0.1316).abs() < 1e-4);

    let half = calculate_transform(bounds, request.viewport, 0.5, 1.0).unwrap();
    assert!((half.translation_x - 20.0).abs() < 1e-4);
    assert!((half.translation_y - 100.0).abs() < 1e-4);
    assert!((half.scale_x - 0.6389).abs() < 1e-4);
    assert!((half.scale_y - 0.5658).abs() < 1e-4);

    let end = calculate_transform(bounds, request.viewport, 1.0, 1.0).unwrap();
    assert!(end.translation_x.abs() < 1e-4 && end.translation_y.abs() < 1e-4);
    assert!((end.scale_x - 1.0).abs() < 1e-6 && (end.scale_y - 1.0).abs() < 1e-6);
}

#[test]
fn test_sampled_open_and_close() {
    let frames =
        sample_transition(&scenario(), &MotionTimings::default(), Duration::from_millis(10), true);

    let open_end = frames.iter().position(|f| f.frame.phase == TransitionPhase::Open).unwrap();
    assert_eq!(frames[open_end].elapsed_ms, 350);
    assert_eq!(frames[open_end].frame.values, MotionValues::FULLSCREEN);

    let peak = frames[..=open_end]
        .iter()
        .map(|f| f.frame.values.scale_overshoot)
        .fold(f32::MIN, f32::max);
    assert!(peak > 1.0 && peak <= 1.02 + 1e-6, "{peak}");

    // Close never overshoots.
    assert!(
        frames[open_end..]
            .iter()
            .all(|f| f.frame.values.scale_overshoot <= 1.0 + f32::EPSILON)
    );

    let last = frames.last().unwrap();
    assert_eq!(last.elapsed_ms, 650);
    assert_eq!(last.frame.phase, TransitionPhase::Idle);
    assert_eq!(last.frame.values, MotionValues::thumbnail(12.0));
}

#[test]
fn test_custom_timings_change_sample_length() {
    let config = MotionConfig { open_duration: 200, ..MotionConfig::default() };
    let timings = MotionTimings::from_config(&config);
    let frames = sample_transition(&scenario(), &timings, Duration::from_millis(50), false);
    assert_eq!(frames.last().unwrap().elapsed_ms, 200);
}

#[test]
fn test_rendered_table_lists_every_frame() {
    let frames =
        sample_transition(&scenario(), &MotionTimings::default(), Duration::from_millis(70), false);
    let table = render_frames_table(&frames);

    // Header, borders, and one line per frame.
    assert!(table.lines().count() >= frames.len() + 3);
    assert!(table.contains("Translation"));
    assert!(table.contains("40.0, 200.0"));
}
