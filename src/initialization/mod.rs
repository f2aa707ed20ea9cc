//! Application initialization.
//!
//! The engine itself is stateless; the only process-wide resource the CLI
//! sets up is the logger.

mod logger;

pub use logger::init_logger_with;
