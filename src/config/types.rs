//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_SOURCE_ID;
use crate::event::EventKind;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration.
///
/// Report files are run through a registry holding one generic adapter
/// configured from these options.
///
/// # Examples
///
/// ```bash
/// # Extract events from two saved reports
/// abuse_events report1.eml report2.eml --source-id acme --event-type phishing
///
/// # Only accept reports from one sender, reading the date from a marker
/// abuse_events report.eml --from-contains abuse@example.net --date-marker "Date/Time:"
///
/// # Read a report from stdin
/// cat report.eml | abuse_events -
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "abuse_events",
    about = "Extracts normalized abuse events from report emails."
)]
pub struct Config {
    /// Report files to read (`-` reads stdin)
    #[arg(value_parser, required = true)]
    pub files: Vec<PathBuf>,

    /// Source id stamped on every event
    #[arg(long, default_value = DEFAULT_SOURCE_ID)]
    pub source_id: String,

    /// Primary event type, e.g. spam, phishing, port_scan, login_attack
    #[arg(long, default_value = "unknown")]
    pub event_type: EventKind,

    /// Only accept reports whose From header contains this text
    #[arg(long)]
    pub from_contains: Option<String>,

    /// Marker preceding the event date in the report body (repeatable)
    #[arg(long = "date-marker")]
    pub date_markers: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            source_id: DEFAULT_SOURCE_ID.to_string(),
            event_type: EventKind::Unknown,
            from_contains: None,
            date_markers: Vec::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.files.is_empty());
        assert_eq!(config.source_id, DEFAULT_SOURCE_ID);
        assert_eq!(config.event_type, EventKind::Unknown);
        assert_eq!(config.log_format, LogFormat::Plain);
    }

    #[test]
    fn test_parse_minimal_args() {
        let config = Config::try_parse_from(["abuse_events", "report.eml"]).unwrap();
        assert_eq!(config.files, vec![PathBuf::from("report.eml")]);
        assert_eq!(config.source_id, DEFAULT_SOURCE_ID);
        assert_eq!(config.event_type, EventKind::Unknown);
        assert!(config.date_markers.is_empty());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_parse_requires_a_file() {
        assert!(Config::try_parse_from(["abuse_events"]).is_err());
    }

    #[test]
    fn test_parse_event_type_snake_case() {
        let config =
            Config::try_parse_from(["abuse_events", "-", "--event-type", "PortScan"]);
        assert!(config.is_err());

        let config =
            Config::try_parse_from(["abuse_events", "-", "--event-type", "PORT_SCAN"]).unwrap();
        assert_eq!(config.event_type, EventKind::PortScan);
    }

    #[test]
    fn test_parse_rejects_unknown_event_type() {
        assert!(
            Config::try_parse_from(["abuse_events", "-", "--event-type", "nonsense"]).is_err()
        );
    }
}
