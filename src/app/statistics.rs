//! Run statistics output.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, InfoType, ProcessingStats, WarningType};
use crate::RunReport;

/// Logs a one-line summary of a run.
pub fn print_run_summary(report: &RunReport) {
    info!(
        "Processed {} report{} ({} with events, {} failed), emitted {} event{} in {:.2}s",
        report.reports,
        if report.reports == 1 { "" } else { "s" },
        report.succeeded,
        report.failed,
        report.events,
        if report.events == 1 { "" } else { "s" },
        report.elapsed_seconds
    );
}

/// Logs every non-zero error, warning and info counter.
pub fn print_error_statistics(stats: &ProcessingStats) {
    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Failed reports ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            log_count(error_type.as_str(), stats.get_error_count(error_type));
        }
    }

    let total_warnings = stats.total_warnings();
    if total_warnings > 0 {
        info!("Warnings ({} total):", total_warnings);
        for warning_type in WarningType::iter() {
            log_count(warning_type.as_str(), stats.get_warning_count(warning_type));
        }
    }

    if stats.total_info() > 0 {
        info!("Info:");
        for info_type in InfoType::iter() {
            log_count(info_type.as_str(), stats.get_info_count(info_type));
        }
    }
}

fn log_count(label: &str, count: usize) {
    if count > 0 {
        info!("   {}: {}", label, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_empty() {
        // Should not panic when nothing was counted
        print_error_statistics(&ProcessingStats::new());
    }

    #[test]
    fn test_print_error_statistics_all_categories() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::NoMatchingAdapter);
        stats.increment_error(ErrorType::UnreadableInput);
        stats.increment_warning(WarningType::MissingEventDate);
        stats.add_info(InfoType::EventsEmitted, 12);
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_run_summary() {
        let report = RunReport {
            reports: 1,
            succeeded: 1,
            failed: 0,
            events: 1,
            elapsed_seconds: 0.01,
        };
        print_run_summary(&report);
        print_run_summary(&RunReport::default());
    }
}
