//! Command-line interface for Gallery Motion.
//!
//! The CLI samples transitions deterministically, previews them in real time
//! through the transition actor, and manages the configuration file.

mod commands;
mod output;

pub use commands::Cli;
pub use commands::transition::{SampledFrame, render_frames_table, sample_transition};
