//! Integration tests for configuration loading and timing derivation.

use std::fs;
use std::time::Duration;

use gallery_motion::config::{ConfigError, EasingType, load_config_from_path};
use gallery_motion::config::template::create_config_file;
use gallery_motion::transition::MotionTimings;

#[test]
fn test_jsonc_overrides_flow_into_timings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.jsonc");
    fs::write(
        &path,
        r#"{
            // Slower, calmer open
            "motion": {
                "openDuration": 500,
                "scrimDelay": 100, /* longer wait */
                "openEasing": "fast-out-slow-in",
                "fps": 120
            },
            "thumbnail": { "cornerRadius": 4 }
        }"#,
    )
    .unwrap();

    let (config, loaded_from) = load_config_from_path(&path).unwrap();
    assert_eq!(loaded_from, path);
    assert_eq!(config.motion.open_easing, EasingType::FastOutSlowIn);
    assert!((config.thumbnail.corner_radius - 4.0).abs() < f32::EPSILON);

    let timings = MotionTimings::from_config(&config.motion);
    assert_eq!(timings.open_duration, Duration::from_millis(500));
    assert_eq!(timings.close_duration, Duration::from_millis(300));
    assert_eq!(timings.scrim_delay, Duration::from_millis(100));
    assert_eq!(timings.frame_interval, Duration::from_secs(1) / 120);
    assert_eq!(
        timings.overshoot_start + timings.overshoot_rise + timings.settle_window(),
        timings.open_duration
    );
}

#[test]
fn test_out_of_range_values_are_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "motion": { "openDuration": 1, "closeDuration": 60000, "fps": 1000 } }"#)
        .unwrap();

    let (config, _) = load_config_from_path(&path).unwrap();
    let timings = MotionTimings::from_config(&config.motion);
    assert_eq!(timings.open_duration, Duration::from_millis(50));
    assert_eq!(timings.close_duration, Duration::from_millis(2000));
    assert_eq!(timings.frame_interval, Duration::from_secs(1) / 240);
}

#[test]
fn test_disabled_motion_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.jsonc");
    fs::write(&path, r#"{ "motion": { "enabled": false } }"#).unwrap();

    let (config, _) = load_config_from_path(&path).unwrap();
    assert!(!MotionTimings::from_config(&config.motion).enabled);
}

#[test]
fn test_invalid_json_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.jsonc");
    fs::write(&path, r#"{ "motion": { "openDuration": "fast" } }"#).unwrap();

    assert!(matches!(load_config_from_path(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn test_missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.jsonc"));
    assert!(matches!(result, Err(ConfigError::NotFound)));
}

#[test]
fn test_template_round_trips_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gallery-motion").join("config.jsonc");
    create_config_file(&path).unwrap();

    let (config, _) = load_config_from_path(&path).unwrap();
    assert_eq!(MotionTimings::from_config(&config.motion), MotionTimings::default());
}
