//! Configurable catch-all adapter.
//!
//! Handles the common "free text with some IPs and URLs in it" report:
//! every identifier in the text body (and in the IP/URL columns of a CSV
//! attachment or HTML table, if present) becomes an event of one configured
//! type.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use log::debug;
use regex::Regex;

use super::{Adapter, EmailView, Parsed};
use crate::config::{Config, DEFAULT_PRIORITY, MAX_SUBJECT_SNIPPET};
use crate::date;
use crate::error_handling::ReportError;
use crate::event::{Event, EventDetail, EventType};
use crate::extract::{self, csv};
use crate::html;
use crate::identifier::{
    censored_octet_hint, clean_url, extract_all_ips, extract_urls, is_ip, is_url, parse_port,
    reconstruct_censored_ip, split_ip_port, url_host,
};
use crate::materialize::materialize;
use crate::utils::compile_regex_unsafe;
use crate::utils::sanitize::snippet;

// IPv4 with one or more octets replaced by x, optionally followed by `.port`.
static CENSORED_IP_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"\b[0-9xX]{1,3}(?:\.[0-9xX]{1,3}){3}(?:\.[0-9]{1,5})?\b",
        "CENSORED_IP_RE",
    )
});

const TABLE_IP_COLUMNS: &[&str] = &["ip", "ip address", "source ip", "src_ip", "source"];
const TABLE_URL_COLUMNS: &[&str] = &["url", "uri", "link"];
const PORT_LABELS: &[&str] = &["Source Port:", "Port:"];
const PROTOCOL_LABELS: &[&str] = &["Protocol:"];

/// Adapter driven entirely by configuration.
///
/// # Examples
///
/// ```
/// use abuse_events::adapter::{Adapter, EmailView, GenericAdapter, Parsed};
/// use abuse_events::event::EventType;
///
/// let adapter = GenericAdapter::new("acme", EventType::PortScan).date_marker("Time:");
/// let email = EmailView::new()
///     .with_header("Subject", "Port scan from 192.0.2.7")
///     .with_body("Source: 192.0.2.7\nTime: 2024-01-02 15:04:05\n");
///
/// let Parsed::Events(events) = adapter.parse(&email).unwrap() else { panic!() };
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].ip.as_deref(), Some("192.0.2.7"));
/// assert!(events[0].event_date.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GenericAdapter {
    source_id: String,
    event_type: EventType,
    from_contains: Option<String>,
    date_markers: Vec<String>,
    priority: u32,
}

impl GenericAdapter {
    /// Creates an adapter that stamps `event_type` on every event.
    pub fn new(source_id: impl Into<String>, event_type: EventType) -> Self {
        Self {
            source_id: source_id.into(),
            event_type,
            from_contains: None,
            date_markers: Vec::new(),
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Builds the adapter described by the CLI options.
    pub fn from_config(config: &Config) -> Self {
        let adapter = Self::new(config.source_id.clone(), config.event_type.into())
            .date_markers(config.date_markers.iter().cloned());
        match &config.from_contains {
            Some(needle) => adapter.from_contains(needle.clone()),
            None => adapter,
        }
    }

    /// Only match reports whose `From` contains `needle` (case-insensitive).
    pub fn from_contains(mut self, needle: impl Into<String>) -> Self {
        self.from_contains = Some(needle.into());
        self
    }

    /// Adds a marker that precedes the event date in the body.
    pub fn date_marker(mut self, marker: impl Into<String>) -> Self {
        self.date_markers.push(marker.into());
        self
    }

    /// Adds several date markers, tried in order.
    pub fn date_markers(mut self, markers: impl IntoIterator<Item = String>) -> Self {
        self.date_markers.extend(markers);
        self
    }

    /// Overrides the dispatch priority.
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Event date from the first date marker that parses, else the `Date` header.
    fn event_date(&self, email: &EmailView, text: &str) -> Option<DateTime<Utc>> {
        let arrival = email.report_date().unwrap_or_else(Utc::now);
        self.date_markers
            .iter()
            .find_map(|marker| {
                let same_line = extract::field_value(text, marker);
                let candidate = if same_line.is_empty() {
                    extract::first_nonempty_line_after(text, marker)
                } else {
                    same_line
                };
                date::parse_with_year_inference(candidate, arrival)
            })
            .or_else(|| email.report_date())
    }

    fn collect_ips(&self, email: &EmailView, text: &str) -> Vec<String> {
        let mut ips: Vec<String> = extract_all_ips(text)
            .iter()
            .map(|candidate| is_ip(candidate))
            .filter(|ip| !ip.is_empty())
            .collect();

        let hint = censored_octet_hint(text);
        if !hint.is_empty() {
            for template in CENSORED_IP_RE.find_iter(text) {
                let template = template.as_str();
                if !template.contains(['x', 'X']) {
                    continue;
                }
                let (ip, _) = split_ip_port(&reconstruct_censored_ip(template, &hint));
                if !ip.is_empty() {
                    debug!("Reconstructed censored IP {} as {}", template, ip);
                    ips.push(ip);
                }
            }
        }

        for value in table_column_values(email, TABLE_IP_COLUMNS) {
            let ip = is_ip(&value);
            if !ip.is_empty() {
                ips.push(ip);
            }
        }

        dedupe(ips)
    }

    fn collect_urls(&self, email: &EmailView, text: &str) -> Vec<String> {
        let mut urls = extract_urls(text);
        for value in table_column_values(email, TABLE_URL_COLUMNS) {
            let url = clean_url(&value);
            if is_url(&url) {
                urls.push(url);
            }
        }
        dedupe(urls)
    }

    fn template(&self, email: &EmailView, text: &str, ip_count: usize) -> Event {
        let mut template = Event::new(self.source_id.clone(), self.event_type.clone());
        if let Some(date) = self.event_date(email, text) {
            template = template.with_event_date(date);
        }

        // A single port line only describes the event if there is one source.
        if ip_count == 1 {
            if let Some(port) = PORT_LABELS
                .iter()
                .find_map(|label| parse_port(extract::line_field_value(text, label)))
            {
                template = template.with_port(port);
            }
        }

        if let Some(protocol) = PROTOCOL_LABELS
            .iter()
            .map(|label| extract::line_field_value(text, label))
            .find(|value| !value.is_empty())
        {
            template.add_detail(EventDetail::TransportProtocol {
                protocol: protocol.to_ascii_lowercase(),
            });
        }

        template
    }
}

impl Adapter for GenericAdapter {
    fn source_id(&self) -> &str {
        &self.source_id
    }

    fn priority(&self) -> u32 {
        self.priority
    }

    fn matches(&self, email: &EmailView) -> bool {
        match &self.from_contains {
            Some(needle) => email
                .from()
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    fn parse(&self, email: &EmailView) -> Result<Parsed, ReportError> {
        let subject = snippet(email.subject(), MAX_SUBJECT_SNIPPET);
        let text = email.text_body();
        if text.trim().is_empty() && email.parts().is_empty() {
            return Err(ReportError::UnrecognizedFormat {
                source_id: self.source_id.clone(),
                subject,
            });
        }

        let ips = self.collect_ips(email, &text);
        let urls = self.collect_urls(email, &text);
        let template = self.template(email, &text, ips.len());

        let mut events =
            materialize(&template, &ips, &urls).map_err(|source| ReportError::NoIdentifier {
                source_id: self.source_id.clone(),
                subject,
                source,
            })?;

        for event in &mut events {
            if let Some(host) = event.url.as_deref().and_then(url_host) {
                event.domain = Some(host);
            }
        }

        debug!(
            "{} extracted {} event(s) from {} IP(s) and {} URL(s)",
            self.source_id,
            events.len(),
            ips.len(),
            urls.len()
        );
        Ok(Parsed::Events(events))
    }
}

/// Values of `columns` from a CSV attachment, then from an HTML table.
fn table_column_values(email: &EmailView, columns: &[&str]) -> Vec<String> {
    let mut values = csv_column_values(email, columns);
    values.extend(html_column_values(email, columns));
    values
}

fn csv_column_values(email: &EmailView, columns: &[&str]) -> Vec<String> {
    let Some(part) = email
        .part_by_filename_suffix(".csv")
        .or_else(|| email.part_by_content_type("text/csv"))
    else {
        return Vec::new();
    };
    let rows = csv::records(part.body());
    columns
        .iter()
        .flat_map(|column| csv::column_values(&rows, column))
        .collect()
}

// The first row with cells is the header row.
fn html_column_values(email: &EmailView, columns: &[&str]) -> Vec<String> {
    let source = if html::is_html(email.body()) {
        email.body()
    } else {
        match email.part_by_content_type("text/html") {
            Some(part) => part.body(),
            None => return Vec::new(),
        }
    };

    let rows = html::table_rows(source);
    let Some((header, data)) = rows.split_first() else {
        return Vec::new();
    };
    let header: Vec<String> = header.iter().map(|cell| cell.to_lowercase()).collect();
    columns
        .iter()
        .filter_map(|column| header.iter().position(|cell| cell == column))
        .flat_map(|index| data.iter().filter_map(move |row| row.get(index)))
        .filter(|value| !value.is_empty())
        .cloned()
        .collect()
}

fn dedupe(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}
