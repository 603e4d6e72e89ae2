//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `iss_flyover` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use iss_flyover::initialization::init_logger_with;
use iss_flyover::{run_demo, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the demonstration lookups using the library
    match run_demo(&config).await {
        Ok(report) => {
            println!(
                "✅ Ran {} lookup{} ({} succeeded, {} failed)",
                report.total(),
                if report.total() == 1 { "" } else { "s" },
                report.succeeded,
                report.failed
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("iss_flyover error: {:#}", e);
            process::exit(1);
        }
    }
}
