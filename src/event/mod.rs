//! Canonical event model.
//!
//! An [`Event`] is the unit of output of the engine. Adapters build one
//! template per report and hand it to the materializer, which clones it once
//! per identifier.

mod types;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use types::{EventDetail, EventKind, EventType};

/// One structured abuse event.
///
/// `ip`, `url` and `domain` are independent: an event may carry any
/// combination of them. `event_types` always holds at least the primary type
/// passed to [`Event::new`]; types and details are append-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    source_id: String,
    /// Reported IP, canonical form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    /// Reported URL, cleaned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Host of the reported URL or a reported domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Reported source port.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// When the abuse happened, in UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<DateTime<Utc>>,
    event_types: Vec<EventType>,
    event_details: Vec<EventDetail>,
}

impl Event {
    /// Creates an event for `source_id` with `primary` as its first type.
    pub fn new(source_id: impl Into<String>, primary: EventType) -> Self {
        Self {
            source_id: source_id.into(),
            ip: None,
            url: None,
            domain: None,
            port: None,
            event_date: None,
            event_types: vec![primary],
            event_details: Vec::new(),
        }
    }

    /// Sets the reported IP.
    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    /// Sets the reported URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the reported domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the reported port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the event date.
    pub fn with_event_date(mut self, date: DateTime<Utc>) -> Self {
        self.event_date = Some(date);
        self
    }

    /// Appends a secondary event type.
    pub fn with_type(mut self, event_type: EventType) -> Self {
        self.event_types.push(event_type);
        self
    }

    /// Appends a detail.
    pub fn with_detail(mut self, detail: EventDetail) -> Self {
        self.event_details.push(detail);
        self
    }

    /// Appends a secondary event type in place.
    pub fn add_type(&mut self, event_type: EventType) {
        self.event_types.push(event_type);
    }

    /// Appends a detail in place.
    pub fn add_detail(&mut self, detail: EventDetail) {
        self.event_details.push(detail);
    }

    /// Identifier of the adapter that produced this event.
    pub fn source_id(&self) -> &str {
        &self.source_id
    }

    /// The primary (first) event type.
    pub fn primary_type(&self) -> &EventType {
        // `new` seeds the list and nothing removes from it
        &self.event_types[0]
    }

    /// All event types, primary first.
    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    /// All details in insertion order.
    pub fn event_details(&self) -> &[EventDetail] {
        &self.event_details
    }

    /// True when the event carries an IP or a URL.
    pub fn has_identifier(&self) -> bool {
        self.ip.is_some() || self.url.is_some()
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
