//! Error categorization.
//!
//! Maps report errors onto the counters tracked by [`ProcessingStats`].

use super::stats::ProcessingStats;
use super::types::{ErrorType, ReportError};

/// Categorizes a [`ReportError`] into an [`ErrorType`].
pub fn categorize_report_error(error: &ReportError) -> ErrorType {
    match error {
        ReportError::UnrecognizedFormat { .. } => ErrorType::UnrecognizedFormat,
        ReportError::NoMatchingAdapter { .. } => ErrorType::NoMatchingAdapter,
        ReportError::TooManyForwards { .. } => ErrorType::TooManyForwards,
        ReportError::NoIdentifier { .. } => ErrorType::NoIdentifier,
    }
}

/// Records `error` in `stats`.
pub fn update_error_stats(stats: &ProcessingStats, error: &ReportError) {
    stats.increment_error(categorize_report_error(error));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::MaterializeError;

    #[test]
    fn test_categorize_report_error() {
        let err = ReportError::NoMatchingAdapter {
            from: "a@example.com".to_string(),
            subject: String::new(),
        };
        assert_eq!(categorize_report_error(&err), ErrorType::NoMatchingAdapter);

        let err = ReportError::NoIdentifier {
            source_id: "acme".to_string(),
            subject: String::new(),
            source: MaterializeError::NoIdentifier {
                source_id: "acme".to_string(),
            },
        };
        assert_eq!(categorize_report_error(&err), ErrorType::NoIdentifier);
    }

    #[test]
    fn test_update_error_stats() {
        let stats = ProcessingStats::new();
        update_error_stats(&stats, &ReportError::TooManyForwards { hops: 5 });
        update_error_stats(&stats, &ReportError::TooManyForwards { hops: 5 });
        assert_eq!(stats.get_error_count(ErrorType::TooManyForwards), 2);
        assert_eq!(stats.total_errors(), 2);
    }
}
