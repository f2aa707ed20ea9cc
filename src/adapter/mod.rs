//! Report adapters and dispatch.
//!
//! An [`Adapter`] recognizes one family of reports and turns it into events
//! using the shared primitives ([`crate::extract`], [`crate::identifier`],
//! [`crate::date`], [`crate::materialize`]). Adapters are kept in a
//! [`Registry`] ordered by priority; the first adapter whose
//! [`Adapter::matches`] accepts a report parses it.
//!
//! An adapter that only unwraps a report (a forwarded message, a report
//! attached to a cover mail) returns [`Parsed::Forward`] with a new
//! [`EmailView`], and the registry dispatches that view again.

mod email;
mod forward;
mod generic;
mod registry;

pub use email::{EmailView, Headers, MimePart};
pub use forward::ForwardedMessageAdapter;
pub use generic::GenericAdapter;
pub use registry::Registry;

use crate::config::DEFAULT_PRIORITY;
use crate::error_handling::ReportError;
use crate::event::Event;

/// Outcome of a successful [`Adapter::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed {
    /// Final events for the report.
    Events(Vec<Event>),
    /// A rewritten report to dispatch again.
    Forward(EmailView),
}

/// A parser for one family of reports.
pub trait Adapter: Send + Sync {
    /// Identifier stamped on the events this adapter produces.
    fn source_id(&self) -> &str;

    /// Dispatch order; lower runs first.
    fn priority(&self) -> u32 {
        DEFAULT_PRIORITY
    }

    /// True if this adapter handles `email`.
    fn matches(&self, email: &EmailView) -> bool;

    /// Turns `email` into events, or into a report to re-dispatch.
    fn parse(&self, email: &EmailView) -> Result<Parsed, ReportError>;
}
