//! Permissive date/time parsing for report timestamps.
//!
//! Abuse reports carry dates in every format imaginable: RFC 2822 mail
//! headers, ISO timestamps, US and European numeric dates, syslog lines with
//! no year, timezone abbreviations instead of offsets. [`parse`] tries an
//! ordered cascade of formats and returns the first success as UTC:
//!
//! 1. RFC 3339, then RFC 2822
//! 2. formats with a numeric offset (`+0200`, `-07:00`)
//! 3. a timezone abbreviation (`CEST`, `(PDT)`) is removed and mapped to a
//!    fixed offset
//! 4. naive date-times, read as UTC (US `MM/DD` wins over EU `DD/MM`)
//! 5. bare dates, read as UTC midnight
//! 6. 10-digit Unix epoch seconds
//! 7. RFC 5322 cleanup (comments and weekday removed) and a retry
//!
//! Ordinal suffixes (`2nd`, `21st`) are stripped before matching.
//! [`parse_with_year_inference`] additionally handles year-less formats.

mod formats;
pub mod timezone;

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use log::trace;
use regex::Regex;

use crate::utils::compile_regex_unsafe;
use formats::{
    NAIVE_DATETIME_FORMATS, NAIVE_DATE_FORMATS, OFFSET_FORMATS, YEARLESS_DATETIME_FORMATS,
    YEARLESS_DATE_FORMATS,
};

static ORDINAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)\b([0-9]{1,2})(?:st|nd|rd|th)\b", "ORDINAL_RE")
});
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\([^()]*\)", "COMMENT_RE"));
static WEEKDAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)^(?:mon|tue|wed|thu|fri|sat|sun)[a-z]*\.?,?\s*",
        "WEEKDAY_RE",
    )
});
static EPOCH_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"^[0-9]{10}$", "EPOCH_RE"));

/// Parses an arbitrary date/time string into UTC.
///
/// Returns `None` when no format in the cascade matches. Never panics.
///
/// # Examples
///
/// ```
/// use abuse_events::date::parse;
///
/// let a = parse("Jan 2, 2024 15:04:05").unwrap();
/// let b = parse("2024-01-02 15:04:05").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(parse("Tue, 02 Jan 2024 16:04:05 +0100"), Some(b));
/// assert_eq!(parse("not a date"), None);
/// ```
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    let normalized = normalize(s);
    if normalized.is_empty() {
        return None;
    }

    if let Some(dt) = parse_normalized(&normalized) {
        return Some(dt);
    }

    let cleaned = rfc5322_cleanup(&normalized);
    if cleaned != normalized && !cleaned.is_empty() {
        if let Some(dt) = parse_normalized(&cleaned) {
            return Some(dt);
        }
    }

    trace!("No date format matched {:?}", s);
    None
}

/// Parses `s`, falling back to year-less formats anchored on `arrival`.
///
/// A full [`parse`] is tried first. Otherwise formats without a year
/// (`Dec 20`, `Dec 20 14:23:45`, `20 Dec`, `12/20 08:00`) take the year of
/// `arrival`; when that lands after `arrival` the previous year is used, so a
/// December log line in a January report resolves to last December.
///
/// # Examples
///
/// ```
/// use abuse_events::date::{parse, parse_with_year_inference};
///
/// let arrival = parse("2024-01-05 10:00:00").unwrap();
/// let inferred = parse_with_year_inference("Dec 20", arrival).unwrap();
/// assert_eq!(inferred, parse("2023-12-20").unwrap());
/// ```
pub fn parse_with_year_inference(s: &str, arrival: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if let Some(dt) = parse(s) {
        return Some(dt);
    }

    let normalized = normalize(s);
    if normalized.is_empty() {
        return None;
    }

    let cleaned = rfc5322_cleanup(&normalized);
    let yearless =
        |year: i32| parse_yearless(&normalized, year).or_else(|| parse_yearless(&cleaned, year));

    let year = arrival.year();
    match yearless(year) {
        Some(candidate) if candidate <= arrival => Some(candidate),
        Some(candidate) => {
            trace!(
                "Year-less date {:?} lands after arrival {}, using {}",
                s,
                arrival,
                year - 1
            );
            yearless(year - 1).or(Some(candidate))
        }
        // Feb 29 outside a leap year only exists in an earlier year.
        None => yearless(year - 1).filter(|candidate| *candidate <= arrival),
    }
}

/// Trims, removes ordinal suffixes and collapses runs of whitespace.
fn normalize(s: &str) -> String {
    let without_ordinals = ORDINAL_RE.replace_all(s.trim(), "$1");
    collapse_whitespace(&without_ordinals)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drops parenthesised comments and a leading weekday.
fn rfc5322_cleanup(s: &str) -> String {
    let without_comments = COMMENT_RE.replace_all(s, " ");
    let collapsed = collapse_whitespace(&without_comments);
    WEEKDAY_RE.replace(&collapsed, "").trim().to_string()
}

fn parse_normalized(s: &str) -> Option<DateTime<Utc>> {
    if let Some(dt) = parse_with_offset(s) {
        return Some(dt);
    }

    if let Some((rest, offset)) = timezone::strip_timezone(s) {
        if let Some(dt) = parse_with_offset(&rest).or_else(|| parse_naive(&rest, offset)) {
            return Some(dt);
        }
    }

    let utc = FixedOffset::east_opt(0)?;
    parse_naive(s, utc).or_else(|| parse_epoch(s))
}

fn parse_with_offset(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .ok()
        .or_else(|| {
            OFFSET_FORMATS
                .iter()
                .find_map(|format| DateTime::parse_from_str(s, format).ok())
        })
        .map(|dt| dt.with_timezone(&Utc))
}

fn parse_naive(s: &str, offset: FixedOffset) -> Option<DateTime<Utc>> {
    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NAIVE_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    localize(&naive, offset)
}

fn parse_epoch(s: &str) -> Option<DateTime<Utc>> {
    if !EPOCH_RE.is_match(s) {
        return None;
    }
    let seconds: i64 = s.parse().ok()?;
    Utc.timestamp_opt(seconds, 0).single()
}

fn parse_yearless(s: &str, year: i32) -> Option<DateTime<Utc>> {
    let (text, offset) = match timezone::strip_timezone(s) {
        Some((rest, offset)) => (rest, offset),
        None => (s.to_string(), FixedOffset::east_opt(0)?),
    };
    let with_year = format!("{year} {text}");

    let naive = YEARLESS_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&with_year, format).ok())
        .or_else(|| {
            YEARLESS_DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(&with_year, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    localize(&naive, offset)
}

fn localize(naive: &NaiveDateTime, offset: FixedOffset) -> Option<DateTime<Utc>> {
    offset
        .from_local_datetime(naive)
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}
