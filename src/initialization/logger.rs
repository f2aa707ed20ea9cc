//! Logger initialization.

use std::io::{self, Write};

use chrono::{SecondsFormat, Utc};
use colored::Colorize;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` to write to stderr, leaving stdout to the event
/// stream. `RUST_LOG` is read first and `level` overrides it for this crate,
/// so `RUST_LOG=abuse_events::date=trace` still works for a single module
/// when `level` is `trace`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already set.
///
/// # Examples
///
/// ```bash
/// # Watch the date cascade give up on inputs
/// abuse_events report.eml --log-level trace
///
/// # Machine-readable logs
/// abuse_events report.eml --log-format json 2> log.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .filter_module("html5ever", LevelFilter::Error)
        .filter_module("selectors", LevelFilter::Warn)
        .filter_module("abuse_events", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init()?;
    Ok(())
}

/// One JSON object per record: `ts` (RFC 3339, UTC), `level`, `target`, `msg`.
fn write_json(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let line = serde_json::json!({
        "ts": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "target": record.target(),
        "msg": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let level = record.level();
    let label = match level {
        Level::Error => level.as_str().red().bold(),
        Level::Warn => level.as_str().yellow(),
        Level::Info => level.as_str().green(),
        Level::Debug => level.as_str().blue(),
        Level::Trace => level.as_str().purple(),
    };
    writeln!(buf, "{:>5} {} {}", label, record.target().dimmed(), record.args())
}
