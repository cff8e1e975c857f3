//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `search_scrape` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use search_scrape::app::{render_json, render_plain};
use search_scrape::initialization::init_logger_with;
use search_scrape::{run_search, Config, OutputFormat};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let output_format = config.output_format.clone();
    match run_search(config).await {
        Ok(outcome) => {
            let rendered = match output_format {
                OutputFormat::Plain => render_plain(&outcome),
                OutputFormat::Json => {
                    render_json(&outcome).context("Failed to serialize report")? + "\n"
                }
            };
            print!("{rendered}");
            Ok(())
        }
        Err(e) => {
            eprintln!("search_scrape error: {:#}", e);
            process::exit(1);
        }
    }
}
