//! Read-only view of a report email.
//!
//! MIME decoding happens elsewhere; this view holds what a decoder yields:
//! headers, a decoded body and decoded parts. [`EmailView::from_raw`] reads
//! the simple case of an undecoded RFC 5322 message with a plain body.

use chrono::{DateTime, Utc};

use crate::date;
use crate::html;

/// Ordered, multi-valued header list with case-insensitive lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    /// First value of header `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All `(name, value)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of header lines.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no headers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }
}

/// One decoded MIME part (attachment or alternative body).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MimePart {
    headers: Headers,
    body: String,
}

impl MimePart {
    /// Creates a part with the given `Content-Type` and decoded body.
    pub fn new(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        let mut headers = Headers::default();
        headers.push("Content-Type", content_type);
        Self {
            headers,
            body: body.into(),
        }
    }

    /// Returns a copy with an extra header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(name, value);
        self
    }

    /// Part headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Decoded body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Lower-cased media type without parameters, e.g. `text/csv`.
    pub fn content_type(&self) -> String {
        media_type(self.headers.get("Content-Type").unwrap_or(""))
    }

    /// File name from `Content-Disposition` or the `name` content-type parameter.
    pub fn filename(&self) -> Option<&str> {
        self.headers
            .get("Content-Disposition")
            .and_then(|value| header_param(value, "filename"))
            .or_else(|| {
                self.headers
                    .get("Content-Type")
                    .and_then(|value| header_param(value, "name"))
            })
    }
}

/// Immutable view of one report.
///
/// Headers are matched case-insensitively and may repeat. The `with_*`
/// methods consume the view and return a modified one, which is how
/// adapters reroute a report (see `Parsed::Forward`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailView {
    headers: Headers,
    body: String,
    parts: Vec<MimePart>,
}

impl EmailView {
    /// Creates an empty view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a raw message: header block, blank line, body.
    ///
    /// Folded header lines are unfolded. If the text does not start with a
    /// header block the whole input becomes the body. No MIME decoding is
    /// attempted; a multipart body stays as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use abuse_events::adapter::EmailView;
    ///
    /// let raw = "From: abuse@example.net\r\nSubject: Abuse report\r\n for 192.0.2.1\r\n\r\nBody text\r\n";
    /// let email = EmailView::from_raw(raw);
    /// assert_eq!(email.subject(), "Abuse report for 192.0.2.1");
    /// assert_eq!(email.body(), "Body text\r\n");
    /// ```
    pub fn from_raw(raw: &str) -> Self {
        let (header_block, body) = split_header_block(raw);
        match parse_headers(header_block) {
            Some(headers) => Self {
                headers,
                body: body.to_string(),
                parts: Vec::new(),
            },
            None => Self::new().with_body(raw),
        }
    }

    /// Returns a copy with `body` as the decoded body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns a copy with an extra header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(name, value);
        self
    }

    /// Returns a copy with an extra part.
    pub fn with_part(mut self, part: MimePart) -> Self {
        self.parts.push(part);
        self
    }

    /// All headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// First value of header `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    /// Decoded body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decoded parts, in message order.
    pub fn parts(&self) -> &[MimePart] {
        &self.parts
    }

    /// `Subject` header, or `""`.
    pub fn subject(&self) -> &str {
        self.header("Subject").unwrap_or("")
    }

    /// `From` header, or `""`.
    pub fn from(&self) -> &str {
        self.header("From").unwrap_or("")
    }

    /// `Date` header parsed to UTC.
    pub fn report_date(&self) -> Option<DateTime<Utc>> {
        self.header("Date").and_then(date::parse)
    }

    /// First part whose media type equals `content_type` (case-insensitive).
    pub fn part_by_content_type(&self, content_type: &str) -> Option<&MimePart> {
        let wanted = content_type.trim().to_ascii_lowercase();
        self.parts.iter().find(|part| part.content_type() == wanted)
    }

    /// First part whose file name ends with `suffix` (case-insensitive).
    pub fn part_by_filename_suffix(&self, suffix: &str) -> Option<&MimePart> {
        let suffix = suffix.to_ascii_lowercase();
        self.parts.iter().find(|part| {
            part.filename()
                .is_some_and(|name| name.to_ascii_lowercase().ends_with(&suffix))
        })
    }

    /// The body as plain text.
    ///
    /// HTML bodies are flattened with [`html::to_text`]. An empty body falls
    /// back to the first `text/plain` part, then the first `text/html` part.
    pub fn text_body(&self) -> String {
        if !self.body.trim().is_empty() {
            let declared_html = media_type(self.header("Content-Type").unwrap_or("")) == "text/html";
            return if declared_html || html::is_html(&self.body) {
                html::to_text(&self.body)
            } else {
                self.body.clone()
            };
        }

        if let Some(part) = self.part_by_content_type("text/plain") {
            return part.body().to_string();
        }
        self.part_by_content_type("text/html")
            .map(|part| html::to_text(part.body()))
            .unwrap_or_default()
    }
}

fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

/// Value of `param=` in a structured header, unquoted.
fn header_param<'a>(value: &'a str, param: &str) -> Option<&'a str> {
    value.split(';').skip(1).find_map(|item| {
        let (key, val) = item.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case(param)
            .then(|| val.trim().trim_matches('"'))
    })
}

/// Splits at the first blank line; without one, everything is header block.
fn split_header_block(raw: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            return (&raw[..offset], &raw[offset + line.len()..]);
        }
        offset += line.len();
    }
    (raw, "")
}

/// Parses an unfolded header block; `None` if any line is not a header.
fn parse_headers(block: &str) -> Option<Headers> {
    let mut headers = Headers::default();
    for line in block.lines() {
        let line = line.trim_end_matches('\r');
        if line.starts_with(' ') || line.starts_with('\t') {
            let (_, value) = headers.0.last_mut()?;
            value.push(' ');
            value.push_str(line.trim());
            continue;
        }
        let (name, value) = line.split_once(':')?;
        if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return None;
        }
        headers.push(name, value.trim());
    }
    if headers.is_empty() {
        None
    } else {
        Some(headers)
    }
}
