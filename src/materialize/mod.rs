//! Event materialization.
//!
//! Combines the IPs and URLs found in one report with a template [`Event`]
//! into the concrete list of events to emit. Pairing policy, first rule that
//! applies wins:
//!
//! | IPs | URLs | result                                             |
//! |-----|------|----------------------------------------------------|
//! | ≥1  | ≤1   | one event per IP, each carrying the URL if any     |
//! | ≤1  | ≥1   | one event per URL, each carrying the IP if any     |
//! | >1  | >1   | one IP-only event per IP, then one URL-only per URL |
//! | 0   | 0    | [`MaterializeError::NoIdentifier`]                 |
//!
//! IPs and URLs are never cross-joined.

use log::debug;

use crate::error_handling::MaterializeError;
use crate::event::Event;

/// Builds the events for one report.
///
/// Blank (empty or whitespace-only) entries are discarded first; the rest
/// are used as given, in order, without deduplication. Every event is a deep
/// clone of `template` with `ip`/`url` overwritten per the pairing policy;
/// all other fields are inherited.
///
/// # Errors
///
/// [`MaterializeError::NoIdentifier`] when no IP and no URL remain.
///
/// # Examples
///
/// ```
/// use abuse_events::event::{Event, EventType};
/// use abuse_events::materialize::materialize;
///
/// let template = Event::new("acme", EventType::Spam);
/// let events = materialize(&template, &["192.0.2.1", "192.0.2.2"], &["http://a.example"]).unwrap();
/// assert_eq!(events.len(), 2);
/// assert!(events.iter().all(|e| e.url.as_deref() == Some("http://a.example")));
/// ```
pub fn materialize<S: AsRef<str>>(
    template: &Event,
    ips: &[S],
    urls: &[S],
) -> Result<Vec<Event>, MaterializeError> {
    let ips = non_blank(ips);
    let urls = non_blank(urls);

    let events: Vec<Event> = match (ips.len(), urls.len()) {
        (0, 0) => {
            return Err(MaterializeError::NoIdentifier {
                source_id: template.source_id().to_string(),
            })
        }
        (1.., 0 | 1) => ips
            .iter()
            .map(|&ip| stamp(template, Some(ip), urls.first().copied()))
            .collect(),
        (0 | 1, 1..) => urls
            .iter()
            .map(|&url| stamp(template, ips.first().copied(), Some(url)))
            .collect(),
        _ => ips
            .iter()
            .map(|&ip| stamp(template, Some(ip), None))
            .chain(urls.iter().map(|&url| stamp(template, None, Some(url))))
            .collect(),
    };

    debug!(
        "Materialized {} event(s) for {} from {} IP(s) and {} URL(s)",
        events.len(),
        template.source_id(),
        ips.len(),
        urls.len()
    );
    Ok(events)
}

fn non_blank<S: AsRef<str>>(values: &[S]) -> Vec<&str> {
    values
        .iter()
        .map(AsRef::as_ref)
        .filter(|value| !value.trim().is_empty())
        .collect()
}

fn stamp(template: &Event, ip: Option<&str>, url: Option<&str>) -> Event {
    let mut event = template.clone();
    event.ip = ip.map(str::to_string);
    event.url = url.map(str::to_string);
    event
}
