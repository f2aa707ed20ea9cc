//! IP address extraction, validation and censored-octet reconstruction.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

use super::port::parse_port;
use crate::utils::compile_regex_unsafe;

// Dotted quad, also matching the defanged separators `[.]`, `(.)` and `{.}`.
const IPV4_PATTERN: &str = r"\b[0-9]{1,3}(?:(?:\[\.\]|\(\.\)|\{\.\}|\.)[0-9]{1,3}){3}\b";
const PLACEHOLDER_PATTERN: &str = r"[xX]+";
const OCTET_HINT_PATTERN: &str = r#"(?i)value\s+of\s+(?:that|the|this)(?:\s+(?:last|final|censored|redacted|hidden))?\s+octet\s+is\s*:?\s*["'“”‘’]?([0-9]{1,3})"#;

static IPV4_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IPV4_PATTERN, "IPV4_RE"));
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(PLACEHOLDER_PATTERN, "PLACEHOLDER_RE"));
static OCTET_HINT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(OCTET_HINT_PATTERN, "OCTET_HINT_RE"));

/// Restores dots in defanged IP notation (`1[.]2[.]3[.]4` becomes `1.2.3.4`).
pub fn defang_ip(s: &str) -> String {
    s.replace("[.]", ".").replace("(.)", ".").replace("{.}", ".")
}

/// Returns the first IPv4-shaped token in `text`, with dots restored.
///
/// Octet ranges are not checked; pass the result through [`is_ip`] for that.
/// Returns `""` when nothing IP-shaped occurs.
///
/// # Examples
///
/// ```
/// use abuse_events::identifier::extract_one_ip;
///
/// assert_eq!(extract_one_ip("attacker 203[.]0[.]113[.]9 seen"), "203.0.113.9");
/// assert_eq!(extract_one_ip("no address here"), "");
/// ```
pub fn extract_one_ip(text: &str) -> String {
    IPV4_RE
        .find(text)
        .map(|m| defang_ip(m.as_str()))
        .unwrap_or_default()
}

/// Returns every IPv4-shaped token in `text`, defanged, deduplicated, in order.
pub fn extract_all_ips(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in IPV4_RE.find_iter(text) {
        let ip = defang_ip(m.as_str());
        if !found.contains(&ip) {
            found.push(ip);
        }
    }
    found
}

/// Validates and normalizes an IP address.
///
/// Accepts IPv4 (with optional defanging and leading zeros, each octet
/// 0-255) and IPv6 literals. Returns the canonical text form, or `None`.
pub fn normalize_ip(s: &str) -> Option<String> {
    let candidate = defang_ip(s.trim());
    if let Some(v4) = parse_ipv4_lenient(&candidate) {
        return Some(v4.to_string());
    }
    candidate.parse::<Ipv6Addr>().ok().map(|v6| v6.to_string())
}

/// Returns `s` normalized if it is a valid IP address, otherwise `""`.
///
/// See [`normalize_ip`]. Idempotent: `is_ip(&is_ip(s)) == is_ip(s)`.
pub fn is_ip(s: &str) -> String {
    normalize_ip(s).unwrap_or_default()
}

/// Substitutes a stated octet value into a censored IP template.
///
/// Reports often redact an octet as `x`/`X` and state its value elsewhere
/// ("the value of that octet is "42"."). Every run of `x`/`X` in `template`
/// is replaced with the digits of `octet_hint`, after the hint is stripped of
/// whitespace, quotes and punctuation. The result is validated:
///
/// - 4 dot-separated tokens: must be a valid IPv4 address.
/// - 5 tokens (IP with a trailing port joined by `.`): the first four must be
///   a valid IPv4 address and the fifth a valid port. The whole
///   `a.b.c.d.port` string is returned; use [`split_ip_port`] to separate it.
///
/// Returns `""` when the hint is not 1-3 digits or validation fails.
///
/// # Examples
///
/// ```
/// use abuse_events::identifier::reconstruct_censored_ip;
///
/// assert_eq!(reconstruct_censored_ip("192.168.1.x", "42"), "192.168.1.42");
/// assert_eq!(reconstruct_censored_ip("10.x.x.5", "\"7\"."), "10.7.7.5");
/// assert_eq!(reconstruct_censored_ip("192.0.2.x.8080", "1"), "192.0.2.1.8080");
/// ```
pub fn reconstruct_censored_ip(template: &str, octet_hint: &str) -> String {
    let digits = octet_hint.trim_matches(|c: char| !c.is_ascii_digit());
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return String::new();
    }

    let template = defang_ip(template.trim());
    let substituted = PLACEHOLDER_RE.replace_all(&template, NoExpand(digits));
    let tokens: Vec<&str> = substituted.split('.').collect();

    match tokens.len() {
        4 => is_ip(&substituted),
        5 => {
            let ip = is_ip(&tokens[..4].join("."));
            match parse_port(tokens[4]) {
                Some(port) if !ip.is_empty() => format!("{ip}.{port}"),
                _ => String::new(),
            }
        }
        _ => String::new(),
    }
}

/// Finds the stated value of a censored octet in report text.
///
/// Matches sentences like `the value of that octet is "42"`. Returns `""`
/// when no such sentence exists.
pub fn censored_octet_hint(text: &str) -> String {
    OCTET_HINT_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Splits an IPv4 address from a trailing port.
///
/// Understands `a.b.c.d:port` and the `a.b.c.d.port` form produced by
/// [`reconstruct_censored_ip`]. Anything else is validated as a plain IP. The
/// IP half is `""` when invalid; the port is `None` when absent or invalid.
pub fn split_ip_port(s: &str) -> (String, Option<u16>) {
    let candidate = defang_ip(s.trim());

    if let Some((host, port)) = candidate.rsplit_once(':') {
        if let Some(ip) = parse_ipv4_lenient(host) {
            return (ip.to_string(), parse_port(port));
        }
    }

    let tokens: Vec<&str> = candidate.split('.').collect();
    if tokens.len() == 5 {
        return (is_ip(&tokens[..4].join(".")), parse_port(tokens[4]));
    }

    (is_ip(&candidate), None)
}

fn parse_ipv4_lenient(s: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = s.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}
