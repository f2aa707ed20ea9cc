//! Application-level helpers used by the `abuse_events` binary.

pub mod statistics;

pub use statistics::{print_error_statistics, print_run_summary};
