//! abuse_events library: turns abuse-report emails into structured events
//!
//! Reports from ISPs, CERTs, brand-protection vendors and honeypots arrive as
//! free text, HTML or CSV attachments. This library provides the shared
//! primitives report adapters are built from, and the adapter registry that
//! runs them:
//!
//! - [`extract`]: marker and block based text extraction
//! - [`identifier`]: IP/URL/port cleaning, validation and reconstruction
//! - [`date`]: permissive multi-format date parsing
//! - [`materialize`]: pairing N IPs with M URLs into events
//! - [`adapter`]: report view, adapter trait, registry and a configurable
//!   generic adapter
//!
//! # Example
//!
//! ```
//! use abuse_events::adapter::{EmailView, GenericAdapter, Registry};
//! use abuse_events::event::EventType;
//!
//! let registry = Registry::new().with(GenericAdapter::new("acme", EventType::Phishing));
//! let email = EmailView::from_raw(
//!     "From: abuse@acme.example\nSubject: Phishing\n\nPage: hxxps://login-bank[.]example/\n",
//! );
//!
//! let events = registry.dispatch(&email).unwrap();
//! assert_eq!(events[0].url.as_deref(), Some("https://login-bank.example/"));
//! assert_eq!(events[0].domain.as_deref(), Some("login-bank.example"));
//! ```

#![warn(missing_docs)]

pub mod adapter;
pub mod app;
pub mod config;
pub mod date;
pub mod error_handling;
pub mod event;
pub mod extract;
pub mod html;
pub mod identifier;
pub mod initialization;
pub mod materialize;
mod utils;

// Re-export public API
pub use adapter::{Adapter, EmailView, Parsed, Registry};
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{MaterializeError, ProcessingStats, ReportError};
pub use event::{Event, EventDetail, EventKind, EventType};
pub use run::{build_registry, run_reports, RunReport};

// Report-file processing behind the CLI
mod run {
    use std::fs;
    use std::io::{self, Write};
    use std::path::Path;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::adapter::{EmailView, ForwardedMessageAdapter, GenericAdapter, Registry};
    use crate::app::{print_error_statistics, print_run_summary};
    use crate::config::Config;
    use crate::error_handling::{ErrorType, ProcessingStats};

    /// Outcome of a [`run_reports`] call.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RunReport {
        /// Report files attempted
        pub reports: usize,
        /// Reports that produced at least one event
        pub succeeded: usize,
        /// Reports that were unreadable or produced no events
        pub failed: usize,
        /// Events written
        pub events: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Builds the registry the CLI dispatches through.
    ///
    /// Forwarded reports are unwrapped first; everything else goes to a
    /// [`GenericAdapter`] configured from `config`.
    pub fn build_registry(config: &Config) -> Registry {
        Registry::new()
            .with(ForwardedMessageAdapter::new())
            .with(GenericAdapter::from_config(config))
    }

    /// Runs every report in `config.files` and writes events to `out`.
    ///
    /// Each event is one JSON object per line. A report that cannot be read
    /// or parsed is logged and counted; it does not stop the run.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing to `out` fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use abuse_events::{run_reports, Config};
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     files: vec![PathBuf::from("report.eml")],
    ///     ..Default::default()
    /// };
    /// let report = run_reports(&config, std::io::stdout().lock())?;
    /// println!("{} events", report.events);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn run_reports<W: Write>(config: &Config, mut out: W) -> Result<RunReport> {
        let start_time = Instant::now();
        let registry = build_registry(config);
        let stats = ProcessingStats::new();
        let mut report = RunReport::default();

        info!(
            "Processing {} report file{} with adapters {:?}",
            config.files.len(),
            if config.files.len() == 1 { "" } else { "s" },
            registry.source_ids()
        );

        for path in &config.files {
            report.reports += 1;

            let raw = match read_report(path) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("{:#}", e);
                    stats.increment_error(ErrorType::UnreadableInput);
                    report.failed += 1;
                    continue;
                }
            };

            let email = EmailView::from_raw(&raw);
            match registry.dispatch_with_stats(&email, &stats) {
                Ok(events) => {
                    for event in &events {
                        serde_json::to_writer(&mut out, event)
                            .context("Failed to write event")?;
                        writeln!(out).context("Failed to write event")?;
                    }
                    report.events += events.len();
                    report.succeeded += 1;
                }
                Err(e) => {
                    warn!("{}: {}", path.display(), e);
                    report.failed += 1;
                }
            }
        }
        out.flush().context("Failed to flush output")?;

        report.elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_error_statistics(&stats);
        print_run_summary(&report);
        Ok(report)
    }

    /// Reads one report; `-` reads stdin. Invalid UTF-8 is replaced.
    fn read_report(path: &Path) -> Result<String> {
        let bytes = if path.as_os_str() == "-" {
            let mut buffer = Vec::new();
            io::Read::read_to_end(&mut io::stdin().lock(), &mut buffer)
                .context("Failed to read report from stdin")?;
            buffer
        } else {
            fs::read(path).with_context(|| format!("Failed to read report {}", path.display()))?
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
