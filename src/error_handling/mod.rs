//! Error handling and processing statistics.
//!
//! This module provides:
//! - Library error types ([`MaterializeError`], [`ReportError`],
//!   [`InitializationError`])
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Mapping of report errors onto statistics categories
//!
//! Statistics categories are:
//! - **Errors**: reports that produced no events
//! - **Warnings**: missing optional data (event date, subject)
//! - **Info**: forwarded reports, emitted events

mod categorization;
mod stats;
mod types;

pub use categorization::{categorize_report_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    ErrorType, InfoType, InitializationError, MaterializeError, ReportError, WarningType,
};
