//! Configuration constants.

/// Maximum number of times a report may be rerouted by `Parsed::Forward`
/// before dispatch gives up.
pub const MAX_FORWARD_HOPS: usize = 5;

/// Adapter priority when an adapter does not override it. Lower runs first.
pub const DEFAULT_PRIORITY: u32 = 100;

/// Source id used by the CLI when `--source-id` is not given.
pub const DEFAULT_SOURCE_ID: &str = "generic";

/// Maximum characters of a subject line carried in errors and logs.
pub const MAX_SUBJECT_SNIPPET: usize = 80;
