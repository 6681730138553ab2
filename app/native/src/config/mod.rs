//! Configuration for Gallery Motion.
//!
//! Provides the configuration types and a process-wide configuration instance
//! loaded once on first use. Files are JSONC, so both `//` and `/* */`
//! comments are allowed.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    ConfigError, EasingType, GalleryMotionConfig, MotionConfig, ThumbnailConfig, config_paths,
    load_config as load_config_default, load_config_from_path,
};

/// Global configuration instance, loaded once.
static CONFIG: OnceLock<GalleryMotionConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via the CLI `--config` flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the search paths.
///
/// Must be called before `init()` or `get_config()` to take effect.
///
/// Returns `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from `custom` or the search paths, falling back
/// to defaults.
///
/// A missing file is not an error: animations run with the built-in timings.
fn load_from(custom: Option<&Path>) -> (GalleryMotionConfig, Option<PathBuf>) {
    let result = custom.map_or_else(load_config_default, load_config_from_path);

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            (config, Some(path))
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            (GalleryMotionConfig::default(), None)
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            (GalleryMotionConfig::default(), None)
        }
    }
}

fn load_or_default() -> GalleryMotionConfig {
    let (config, path) = load_from(CUSTOM_CONFIG_PATH.get().map(PathBuf::as_path));
    if let Some(path) = path {
        let _ = CONFIG_PATH.set(path);
    }
    config
}

/// Initializes and returns the global configuration instance.
///
/// Idempotent: later calls return the same instance.
pub fn init() -> &'static GalleryMotionConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the global configuration instance, initializing it if necessary.
pub fn get_config() -> &'static GalleryMotionConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }
