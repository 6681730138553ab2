//! CLI command definitions using Clap.
//!
//! - `transition` - sample, transform, and play commands
//! - `config_cmd` - configuration file commands
//! - `types` - argument parsers shared across commands

use std::io;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::MotionError;
use crate::{config, schema};

pub mod config_cmd;
pub mod transition;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use transition::{PlayArgs, SampleArgs, TransformArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gallery Motion - preview and tune shared-element transitions.
#[derive(Parser, Debug)]
#[command(name = "gallery-motion")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Log debug output to stderr. `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Sample the open (and optionally close) transition frame by frame.
    ///
    /// Deterministic: frames are computed, not timed.
    #[command(after_long_help = r#"Examples:
  gallery-motion sample --bounds 40,200,300,300 --viewport 1080x2280
  gallery-motion sample -b 40,200,300,300 -v 1080x2280 --step-ms 50 --close
  gallery-motion sample -v 1080x2280 --json   # no bounds: fallback snap"#)]
    Sample(SampleArgs),

    /// Calculate the overlay transform for one progress value.
    Transform(TransformArgs),

    /// Run the transition actor in real time and stream its frames.
    Play(PlayArgs),

    /// Output the configuration JSON Schema.
    ///
    /// Can be redirected to a file for editors that support JSON Schema
    /// validation.
    Schema,

    /// Configuration file management commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(gallery-motion completions --shell zsh)"
    ///   gallery-motion completions --shell fish > ~/.config/fish/completions/gallery-motion.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<std::path::PathBuf> {
        self.config.as_ref().map(std::path::PathBuf::from)
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), MotionError> {
        if let Some(path_buf) = self.config_path() {
            if !path_buf.exists() {
                return Err(MotionError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path_buf.display()
                )));
            }
            config::set_custom_config_path(path_buf);
        }

        match &self.command {
            Commands::Sample(args) => transition::execute_sample(args),
            Commands::Transform(args) => transition::execute_transform(args),
            Commands::Play(args) => transition::execute_play(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "gallery-motion", &mut io::stdout());
    }
}
