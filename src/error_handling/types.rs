//! Error type definitions.
//!
//! Library errors (`thiserror`) plus the error, warning and info categories
//! counted by [`ProcessingStats`](super::ProcessingStats).

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure of the event materializer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    /// Neither an IP nor a URL survived cleaning.
    #[error("no IP or URL to build events from (source {source_id})")]
    NoIdentifier {
        /// Source id of the template event.
        source_id: String,
    },
}

/// Adapter-level failure to turn a report into events.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// An adapter accepted the report but could not read its body.
    #[error("{source_id}: unrecognized report format (subject: {subject:?})")]
    UnrecognizedFormat {
        /// Adapter that rejected the report.
        source_id: String,
        /// Subject snippet for the log.
        subject: String,
    },

    /// No registered adapter matched the report.
    #[error("no adapter matches report from {from:?} (subject: {subject:?})")]
    NoMatchingAdapter {
        /// `From` header of the report.
        from: String,
        /// Subject snippet for the log.
        subject: String,
    },

    /// The report was rerouted more often than allowed.
    #[error("report forwarded more than {hops} times")]
    TooManyForwards {
        /// The hop limit that was exceeded.
        hops: usize,
    },

    /// The adapter found no identifier to report.
    #[error("{source_id}: {source} (subject: {subject:?})")]
    NoIdentifier {
        /// Adapter that parsed the report.
        source_id: String,
        /// Subject snippet for the log.
        subject: String,
        /// The materializer failure.
        #[source]
        source: MaterializeError,
    },
}

/// Types of errors that can occur while processing a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    UnrecognizedFormat,
    NoMatchingAdapter,
    TooManyForwards,
    NoIdentifier,
    UnreadableInput,
}

/// Types of warnings that can occur while processing a report.
///
/// Warnings indicate missing optional data that doesn't prevent events from
/// being emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants start with "Missing" by design
pub enum WarningType {
    MissingEventDate, // Neither a date marker nor the Date header parsed
    MissingSubject,
}

/// Types of informational metrics gathered while processing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    ForwardedReport,
    EventsEmitted,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::UnrecognizedFormat => "Unrecognized report format",
            ErrorType::NoMatchingAdapter => "No matching adapter",
            ErrorType::TooManyForwards => "Too many forwards",
            ErrorType::NoIdentifier => "No IP or URL in report",
            ErrorType::UnreadableInput => "Unreadable input",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::MissingEventDate => "Missing event date",
            WarningType::MissingSubject => "Missing subject",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::ForwardedReport => "Forwarded report",
            InfoType::EventsEmitted => "Events emitted",
        }
    }
}
