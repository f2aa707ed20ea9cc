// Date parsing tests.

use super::*;
use chrono::Timelike;
use proptest::prelude::*;

fn utc(s: &str) -> DateTime<Utc> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    Utc.from_utc_datetime(&naive)
}

#[test]
fn test_parse_rfc3339() {
    assert_eq!(parse("2024-01-02T15:04:05Z"), Some(utc("2024-01-02 15:04:05")));
    assert_eq!(
        parse("2024-01-02T17:04:05+02:00"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_rfc2822() {
    assert_eq!(
        parse("Tue, 02 Jan 2024 16:04:05 +0100"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_rfc2822_with_comment() {
    assert_eq!(
        parse("Tue, 02 Jan 2024 08:04:05 -0700 (MST)"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_wrong_weekday_falls_back_to_cleanup() {
    // 2 Jan 2024 was a Tuesday.
    assert_eq!(
        parse("Fri, 02 Jan 2024 15:04:05 +0000"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_numeric_offset_formats() {
    assert_eq!(
        parse("2024-01-02 17:04:05 +0200"),
        Some(utc("2024-01-02 15:04:05"))
    );
    assert_eq!(
        parse("02/Jan/2024:10:04:05 -0500"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_timezone_abbreviation() {
    assert_eq!(
        parse("2024-01-02 16:04:05 CET"),
        Some(utc("2024-01-02 15:04:05"))
    );
    assert_eq!(
        parse("2024-07-02 17:04:05 CEST"),
        Some(utc("2024-07-02 15:04:05"))
    );
    assert_eq!(
        parse("2024-01-02 15:04:05 UTC"),
        Some(utc("2024-01-02 15:04:05"))
    );
    assert_eq!(
        parse("Tue Jan 2 07:04:05 PST 2024"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_naive_is_utc() {
    assert_eq!(parse("2024-01-02 15:04:05"), Some(utc("2024-01-02 15:04:05")));
    assert_eq!(
        parse("2024-01-02 15:04:05.123"),
        utc("2024-01-02 15:04:05").with_nanosecond(123_000_000)
    );
    assert_eq!(parse("2024-01-02T15:04:05"), Some(utc("2024-01-02 15:04:05")));
}

#[test]
fn test_parse_named_month_equals_iso() {
    let iso = parse("2024-01-02 15:04:05");
    assert!(iso.is_some());
    assert_eq!(parse("Jan 2, 2024 15:04:05"), iso);
    assert_eq!(parse("02 Jan 2024 15:04:05"), iso);
    assert_eq!(parse("Tue Jan 2 15:04:05 2024"), iso);
    assert_eq!(parse("02-Jan-2024 15:04:05"), iso);
    assert_eq!(parse("January 2, 2024 15:04:05"), iso);
}

#[test]
fn test_parse_ordinal_suffix() {
    assert_eq!(parse("Jan 2nd, 2024 15:04:05"), Some(utc("2024-01-02 15:04:05")));
    assert_eq!(parse("21st March 2024"), Some(utc("2024-03-21 00:00:00")));
}

#[test]
fn test_parse_twelve_hour() {
    assert_eq!(
        parse("01/02/2024 03:04:05 PM"),
        Some(utc("2024-01-02 15:04:05"))
    );
    assert_eq!(
        parse("Jan 2, 2024 3:04 pm"),
        Some(utc("2024-01-02 15:04:00"))
    );
}

#[test]
fn test_parse_us_before_eu() {
    // Ambiguous: read as US month/day.
    assert_eq!(parse("03/04/2024 10:00:00"), Some(utc("2024-03-04 10:00:00")));
    // Day > 12 can only be EU.
    assert_eq!(parse("25/12/2024 10:00:00"), Some(utc("2024-12-25 10:00:00")));
    assert_eq!(parse("12/25/2024"), Some(utc("2024-12-25 00:00:00")));
    assert_eq!(parse("25/12/2024"), Some(utc("2024-12-25 00:00:00")));
}

#[test]
fn test_parse_dotted_eu() {
    assert_eq!(parse("25.12.2024 10:00"), Some(utc("2024-12-25 10:00:00")));
    assert_eq!(parse("03.04.2024"), Some(utc("2024-04-03 00:00:00")));
}

#[test]
fn test_parse_bare_dates_are_midnight() {
    assert_eq!(parse("2024-01-02"), Some(utc("2024-01-02 00:00:00")));
    assert_eq!(parse("Jan 2, 2024"), Some(utc("2024-01-02 00:00:00")));
    assert_eq!(parse("2 Jan 2024"), Some(utc("2024-01-02 00:00:00")));
}

#[test]
fn test_parse_epoch_seconds() {
    assert_eq!(parse("1704207845"), Some(utc("2024-01-02 15:04:05")));
    assert_eq!(parse("170420784"), None);
}

#[test]
fn test_parse_collapses_whitespace() {
    assert_eq!(
        parse("  Jan   2,  2024\t15:04:05 \r\n"),
        Some(utc("2024-01-02 15:04:05"))
    );
}

#[test]
fn test_parse_rejects_garbage() {
    assert_eq!(parse(""), None);
    assert_eq!(parse("   "), None);
    assert_eq!(parse("not a date"), None);
    assert_eq!(parse("2024-13-45"), None);
    assert_eq!(parse("Dec 20"), None);
}

#[test]
fn test_year_inference_rolls_back() {
    let arrival = utc("2024-01-05 00:00:00");
    assert_eq!(
        parse_with_year_inference("Dec 20", arrival),
        Some(utc("2023-12-20 00:00:00"))
    );
    assert_eq!(
        parse_with_year_inference("Dec 20 14:23:45", arrival),
        Some(utc("2023-12-20 14:23:45"))
    );
}

#[test]
fn test_year_inference_uses_arrival_year() {
    let arrival = utc("2024-06-30 12:00:00");
    assert_eq!(
        parse_with_year_inference("Jun 29 08:00:00", arrival),
        Some(utc("2024-06-29 08:00:00"))
    );
    assert_eq!(
        parse_with_year_inference("20 Mar", arrival),
        Some(utc("2024-03-20 00:00:00"))
    );
    assert_eq!(
        parse_with_year_inference("03/20 08:15", arrival),
        Some(utc("2024-03-20 08:15:00"))
    );
}

#[test]
fn test_year_inference_prefers_full_parse() {
    let arrival = utc("2024-01-05 00:00:00");
    assert_eq!(
        parse_with_year_inference("2025-12-20 10:00:00", arrival),
        Some(utc("2025-12-20 10:00:00"))
    );
}

#[test]
fn test_year_inference_with_timezone() {
    let arrival = utc("2024-06-30 12:00:00");
    assert_eq!(
        parse_with_year_inference("Jun 29 10:00:00 CEST", arrival),
        Some(utc("2024-06-29 08:00:00"))
    );
}

#[test]
fn test_year_inference_leap_day_from_non_leap_arrival() {
    let arrival = utc("2025-03-01 10:00:00");
    assert_eq!(parse_with_year_inference("Feb 29", arrival), parse("2024-02-29"));
    assert_eq!(
        parse_with_year_inference("Feb 29 23:00:00", arrival),
        Some(utc("2024-02-29 23:00:00"))
    );
}

#[test]
fn test_year_inference_leap_day_never_after_arrival() {
    // 2023 and 2022 have no Feb 29; a later date is never invented.
    let arrival = utc("2023-03-01 00:00:00");
    assert_eq!(parse_with_year_inference("Feb 29", arrival), None);
}

#[test]
fn test_year_inference_with_weekday() {
    let arrival = utc("2024-01-05 00:00:00");
    assert_eq!(
        parse_with_year_inference("Wed Dec 20 10:00:00", arrival),
        Some(utc("2023-12-20 10:00:00"))
    );
    assert_eq!(
        parse_with_year_inference("Fri, Jan 5 08:00:00", utc("2024-01-05 12:00:00")),
        Some(utc("2024-01-05 08:00:00"))
    );
}

#[test]
fn test_year_inference_rejects_garbage() {
    let arrival = utc("2024-01-05 00:00:00");
    assert_eq!(parse_with_year_inference("soon", arrival), None);
    assert_eq!(parse_with_year_inference("", arrival), None);
}

proptest! {
    #[test]
    fn test_parse_never_panics(s in "(?s).{0,60}") {
        let _ = parse(&s);
        let _ = parse_with_year_inference(&s, utc("2024-01-05 00:00:00"));
    }

    #[test]
    fn test_iso_and_named_month_agree(
        year in 1990i32..2090,
        month in 1u32..=12,
        day in 1u32..=28,
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let naive = date.and_hms_opt(hour, minute, second).unwrap();
        let iso = naive.format("%Y-%m-%d %H:%M:%S").to_string();
        let named = naive.format("%b %-d, %Y %H:%M:%S").to_string();
        let expected = Some(Utc.from_utc_datetime(&naive));
        prop_assert_eq!(parse(&iso), expected);
        prop_assert_eq!(parse(&named), expected);
    }
}
