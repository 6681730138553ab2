//! Configuration template generation.

use std::fs;
use std::path::Path;

use crate::schema::SCHEMA_URL;

/// Generates a configuration template with every option commented out.
///
/// The values shown are the built-in defaults.
#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"// Gallery Motion Configuration File
// ==================================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{{
  "$schema": "{SCHEMA_URL}"

  // ============================================================================
  // Motion
  // ============================================================================
  // ,"motion": {{
  //   // Set to false to snap between states without animating (reduced motion)
  //   "enabled": true,
  //
  //   // Open transition duration in milliseconds (50-2000)
  //   "openDuration": 350,
  //
  //   // Close transition duration in milliseconds (50-2000)
  //   "closeDuration": 300,
  //
  //   // Delay before the scrim starts fading in, in milliseconds
  //   "scrimDelay": 50,
  //
  //   // Peak of the settle overshoot (1.0 disables it)
  //   "overshootFactor": 1.02,
  //
  //   // Fraction of the open duration before the overshoot starts rising
  //   "overshootStartFraction": 0.6,
  //
  //   // Fraction of the open duration spent rising to the peak
  //   "overshootRiseFraction": 0.2,
  //
  //   // Damping ratio of the settle spring, 0.1 to 4.0 (below 1.0 wobbles)
  //   "settleDampingRatio": 0.75,
  //
  //   // Easing curves: linear, ease-in, ease-out, ease-in-out,
  //   // ease-out-expo, fast-out-slow-in
  //   "openEasing": "ease-out",
  //   "closeEasing": "ease-out",
  //
  //   // Frames per second while animating (30-240)
  //   "fps": 60
  // }}

  // ============================================================================
  // Thumbnail
  // ============================================================================
  // ,"thumbnail": {{
  //   // Corner radius used when the caller does not supply one
  //   "cornerRadius": 12
  // }}
}}
"#
    )
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, generate_config_template())
}
