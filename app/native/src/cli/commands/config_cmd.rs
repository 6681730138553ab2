//! Config CLI commands.

use std::path::PathBuf;

use clap::Subcommand;
use colored::Colorize;

use crate::config::template::{create_config_file, generate_config_template};
use crate::config::{config_paths, get_config_path};
use crate::error::MotionError;

/// Config management commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum ConfigCommands {
    /// Write a configuration file with every option documented.
    ///
    /// All options are commented out and show their defaults.
    #[command(
        name = "init",
        after_long_help = r#"Examples:
  gallery-motion config init              # Create config at default location
  gallery-motion config init --force      # Overwrite existing config
  gallery-motion config init --path ./motion.jsonc
  gallery-motion config init --stdout     # Print template to stdout"#
    )]
    Init {
        /// Overwrite existing configuration file if it exists.
        #[arg(long, short)]
        force: bool,

        /// Custom path for the configuration file.
        #[arg(long, short, value_name = "PATH")]
        path: Option<PathBuf>,

        /// Print the configuration template to stdout instead of writing a file.
        #[arg(long)]
        stdout: bool,
    },

    /// Show where configuration files are looked up.
    Path,
}

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cmd: &ConfigCommands) -> Result<(), MotionError> {
    match cmd {
        ConfigCommands::Init { force, path, stdout } => {
            if *stdout {
                println!("{}", generate_config_template());
                Ok(())
            } else {
                init_config(*force, path.clone()).map(|path| {
                    println!("Configuration file created at: {}", path.display());
                    println!("\nAll options are commented out by default.");
                })
            }
        }
        ConfigCommands::Path => {
            show_config_path();
            Ok(())
        }
    }
}

/// Writes the template to `custom_path` or the preferred search path.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns an error if the file exists without `force` or cannot be written.
pub fn init_config(force: bool, custom_path: Option<PathBuf>) -> Result<PathBuf, MotionError> {
    let config_path = custom_path.unwrap_or_else(|| {
        config_paths().into_iter().next().unwrap_or_else(|| PathBuf::from("config.jsonc"))
    });

    if config_path.exists() && !force {
        return Err(MotionError::ConfigError(format!(
            "Configuration file already exists at: {}\nUse --force to overwrite.",
            config_path.display()
        )));
    }

    create_config_file(&config_path).map_err(|e| {
        MotionError::ConfigError(format!(
            "Failed to create config file {}: {e}",
            config_path.display()
        ))
    })?;

    tracing::info!(path = %config_path.display(), "created configuration file");
    Ok(config_path)
}

fn show_config_path() {
    crate::config::init();
    println!("Configuration file search paths (in priority order):\n");

    let loaded = get_config_path();
    let mut found_config = false;

    for (i, path) in config_paths().iter().enumerate() {
        let exists = path.exists();
        let marker = if exists && !found_config {
            found_config = true;
            " (active)".green().to_string()
        } else if exists {
            " (exists)".dimmed().to_string()
        } else {
            String::new()
        };

        println!("  {}. {}{}", i + 1, path.display(), marker);
    }

    if let Some(path) = loaded.filter(|p| !config_paths().contains(*p)) {
        println!("\nLoaded from --config: {}", path.display());
    } else if !found_config {
        println!("\nNo configuration file found.");
        println!("Run 'gallery-motion config init' to create one.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");

        let written = init_config(false, Some(path.clone())).unwrap();
        assert_eq!(written, path);
        assert!(path.exists());
    }

    #[test]
    fn test_init_config_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.jsonc");
        std::fs::write(&path, "{}").unwrap();

        let err = init_config(false, Some(path.clone())).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init_config(true, Some(path.clone())).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("openDuration"));
    }
}
