//! Fixed UTC offsets for the timezone abbreviations seen in report dates.

use chrono::FixedOffset;

const HOUR: i32 = 3600;

// Abbreviations are ambiguous in general; these are the readings abuse
// reports use in practice (CST is US Central, IST is India).
const TIMEZONES: &[(&str, i32)] = &[
    ("UTC", 0),
    ("UT", 0),
    ("GMT", 0),
    ("CET", HOUR),
    ("CEST", 2 * HOUR),
    ("MET", HOUR),
    ("MEST", 2 * HOUR),
    ("EET", 2 * HOUR),
    ("EEST", 3 * HOUR),
    ("WET", 0),
    ("WEST", HOUR),
    ("BST", HOUR),
    ("EST", -5 * HOUR),
    ("EDT", -4 * HOUR),
    ("CST", -6 * HOUR),
    ("CDT", -5 * HOUR),
    ("MST", -7 * HOUR),
    ("MDT", -6 * HOUR),
    ("PST", -8 * HOUR),
    ("PDT", -7 * HOUR),
    ("AKST", -9 * HOUR),
    ("AKDT", -8 * HOUR),
    ("HST", -10 * HOUR),
    ("JST", 9 * HOUR),
    ("KST", 9 * HOUR),
    ("IST", 5 * HOUR + 30 * 60),
    ("MSK", 3 * HOUR),
    ("SGT", 8 * HOUR),
    ("HKT", 8 * HOUR),
    ("AEST", 10 * HOUR),
    ("AEDT", 11 * HOUR),
];

/// Returns the fixed offset for a timezone abbreviation such as `CEST`.
///
/// Matching is case-insensitive; surrounding parentheses are ignored.
pub fn offset_for(abbreviation: &str) -> Option<FixedOffset> {
    let name = abbreviation.trim_matches(|c| c == '(' || c == ')');
    TIMEZONES
        .iter()
        .find(|(abbr, _)| abbr.eq_ignore_ascii_case(name))
        .and_then(|(_, seconds)| FixedOffset::east_opt(*seconds))
}

/// Removes the first known timezone abbreviation token from `s`.
///
/// Returns the remaining text (single-space separated) and the offset, or
/// `None` when no token names a known timezone.
pub fn strip_timezone(s: &str) -> Option<(String, FixedOffset)> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    // The leading token is never read as a timezone.
    let (position, offset) = tokens
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, token)| offset_for(token).map(|offset| (i, offset)))?;

    let rest: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != position)
        .map(|(_, token)| *token)
        .collect();
    Some((rest.join(" "), offset))
}
