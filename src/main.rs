//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `abuse_events` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! Events go to stdout as JSON lines; logs go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::process;

use abuse_events::initialization::init_logger_with;
use abuse_events::{run_reports, Config};

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let stdout = io::stdout();
    match run_reports(&config, BufWriter::new(stdout.lock())) {
        Ok(report) if report.succeeded > 0 => Ok(()),
        Ok(_) => {
            eprintln!("abuse_events: no report produced events");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("abuse_events error: {:#}", e);
            process::exit(1);
        }
    }
}
