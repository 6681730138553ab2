//! Gallery Motion CLI.
//!
//! Samples, previews, and configures shared-element transitions.

use clap::Parser;
use gallery_motion::cli::Cli;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.execute() {
        eprintln!("gallery-motion: {err}");
        std::process::exit(1);
    }
}

/// Installs the log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let filter =
        EnvFilter::builder().with_default_directive(default_level.into()).from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
