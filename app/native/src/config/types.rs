//! Configuration types for Gallery Motion.
//!
//! The configuration file is JSONC (JSON with comments) and every field is
//! optional; missing values fall back to the design defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Easing
// ============================================================================

/// Easing function for time-based curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Linear interpolation.
    Linear,
    /// Ease in (slow start, accelerates).
    EaseIn,
    /// Ease out (fast start, slow end).
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end).
    EaseInOut,
    /// Exponential ease out (very fast start, slow end) - snappiest feel.
    EaseOutExpo,
    /// Material standard curve, cubic bezier (0.4, 0, 0.2, 1).
    FastOutSlowIn,
}

// ============================================================================
// Motion Config
// ============================================================================

/// Timing and curve configuration for the open/close choreography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionConfig {
    /// Whether transitions are animated. When false, open and close snap
    /// straight to their end state (reduced motion).
    /// Default: true
    pub enabled: bool,

    /// Open (grow) duration in milliseconds.
    /// Default: 350
    pub open_duration: u32,

    /// Close (shrink) duration in milliseconds. Kept shorter than the open
    /// duration for a snappier dismiss.
    /// Default: 300
    pub close_duration: u32,

    /// Delay before the background scrim starts fading in, in milliseconds.
    /// Default: 50
    pub scrim_delay: u32,

    /// Peak scale reached while settling at the end of the open animation.
    /// Default: 1.02
    pub overshoot_factor: f32,

    /// Fraction of the open duration after which the overshoot starts.
    /// Default: 0.6
    pub overshoot_start_fraction: f32,

    /// Fraction of the open duration spent rising to the overshoot peak.
    /// Default: 0.2
    pub overshoot_rise_fraction: f32,

    /// Damping ratio of the spring settling the overshoot back to 1.0.
    /// Values below 1.0 bounce lightly. Clamped to 0.1..=4.0.
    /// Default: 0.75
    pub settle_damping_ratio: f32,

    /// Easing of the open progress and corner radius.
    /// Default: "ease-out"
    pub open_easing: EasingType,

    /// Easing of every field while closing.
    /// Default: "ease-out"
    pub close_easing: EasingType,

    /// Frame rate the transition actor ticks at.
    /// Default: 60
    pub fps: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            open_duration: 350,
            close_duration: 300,
            scrim_delay: 50,
            overshoot_factor: 1.02,
            overshoot_start_fraction: 0.6,
            overshoot_rise_fraction: 0.2,
            settle_damping_ratio: 0.75,
            open_easing: EasingType::EaseOut,
            close_easing: EasingType::EaseOut,
            fps: 60,
        }
    }
}

/// Defaults for the thumbnails transitions grow from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ThumbnailConfig {
    /// Corner radius used when the caller does not supply one.
    /// Default: 12
    pub corner_radius: f32,
}

impl Default for ThumbnailConfig {
    fn default() -> Self { Self { corner_radius: 12.0 } }
}

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryMotionConfig {
    /// Optional JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Open/close choreography tuning.
    pub motion: MotionConfig,

    /// Thumbnail defaults.
    pub thumbnail: ThumbnailConfig,
}

// ============================================================================
// Loading
// ============================================================================

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/gallery-motion/config.jsonc, \
        the platform config directory, or ~/.gallery-motion.jsonc"
    )]
    NotFound,

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Application directory name inside config roots.
const APP_DIR_NAME: &str = "gallery-motion";

/// Configuration file names to search for (in priority order).
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Home directory file names (in priority order).
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".gallery-motion.jsonc", ".gallery-motion.json"];

/// Returns the possible configuration file paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/gallery-motion/config.jsonc` or `config.json`
/// 2. `~/.config/gallery-motion/config.jsonc` or `config.json`
/// 3. The platform config directory (`dirs::config_dir`)
/// 4. `~/.gallery-motion.jsonc` or `~/.gallery-motion.json`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    let push_dir = |dir: PathBuf, paths: &mut Vec<PathBuf>| {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    };

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_dir(PathBuf::from(xdg_config).join(APP_DIR_NAME), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        push_dir(home.join(".config").join(APP_DIR_NAME), &mut paths);
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_dir(config_dir.join(APP_DIR_NAME), &mut paths);
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from a specific file.
///
/// Comments are stripped before parsing.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist,
/// `ConfigError::IoError` if it cannot be read, or
/// `ConfigError::ParseError` if it is not valid JSON.
pub fn load_config_from_path(path: &Path) -> Result<(GalleryMotionConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: GalleryMotionConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of
/// the expected locations, or the errors of [`load_config_from_path`].
pub fn load_config() -> Result<(GalleryMotionConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}
