//! Command line interface for the Generation Two bundler.
//!
//! Parses arguments, turns them into settings and runs the build workflow
//! with user feedback through [`OutputManager`].

mod args;
pub mod commands;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = RuntimeConfig::from(&args);
    commands::build::execute(&args, &config).await
}
