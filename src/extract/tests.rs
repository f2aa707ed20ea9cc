// Marker extraction tests.

use super::*;
use proptest::prelude::*;

const REPORT: &str = "Dear abuse team,

We observed the following activity:
Source IP: 192.0.2.10
Source Port: 4444
Timestamp: 2024-01-02 15:04:05 UTC

Infringing URLs:

  http://files.example/movie.mkv
  http://files.example/movie2.mkv

Regards,
The Team
";

#[test]
fn test_find_between_basic() {
    assert_eq!(find_between(REPORT, "Source IP: ", "\n"), "192.0.2.10");
}

#[test]
fn test_find_between_missing_start_is_empty() {
    assert_eq!(find_between(REPORT, "Destination IP: ", "\n"), "");
    assert_eq!(locate_between(REPORT, "Destination IP: ", "\n"), None);
}

#[test]
fn test_find_between_empty_end_runs_to_end_of_text() {
    assert_eq!(find_between("a=1\nb=2\n", "a=", ""), "1\nb=2\n");
}

#[test]
fn test_find_between_missing_end_returns_remainder() {
    assert_eq!(find_between("key: value and more", "key: ", "<end>"), "value and more");
}

#[test]
fn test_find_between_uses_first_start_occurrence() {
    assert_eq!(find_between("[a] [b] [c]", "[", "]"), "a");
}

#[test]
fn test_find_between_is_case_sensitive() {
    assert_eq!(find_between("SOURCE IP: 1.2.3.4", "Source IP: ", "\n"), "");
}

#[test]
fn test_find_between_on_line_stops_at_newline() {
    assert_eq!(find_between_on_line("a=1\nb=2", "a=", ""), "1");
    assert_eq!(find_between_on_line("a=1 ;x\nb=2", "a=", ";"), "1 ");
    // end marker on a later line is ignored
    assert_eq!(find_between_on_line("a=1\nb=2;", "a=", ";"), "1");
}

#[test]
fn test_find_between_on_line_drops_carriage_return() {
    assert_eq!(find_between_on_line("a=1\r\nb=2", "a=", ""), "1");
}

#[test]
fn test_find_between_on_line_at_end_of_text() {
    assert_eq!(find_between_on_line("trailing marker", "marker", ""), "");
    assert_eq!(locate_between_on_line("trailing marker", "marker", ""), Some(""));
}

#[test]
fn test_find_all_between() {
    let text = "<ip>1.1.1.1</ip> noise <ip>2.2.2.2</ip> <ip>3.3.3.3";
    assert_eq!(
        find_all_between(text, "<ip>", "</ip>"),
        vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]
    );
}

#[test]
fn test_find_all_between_empty_start_matches_nothing() {
    assert!(find_all_between("abc", "", "c").is_empty());
}

#[test]
fn test_field_value_trims() {
    assert_eq!(field_value(REPORT, "Source Port:"), "4444");
    assert_eq!(field_value(REPORT, "Timestamp:"), "2024-01-02 15:04:05 UTC");
    assert_eq!(field_value(REPORT, "Nope:"), "");
}

#[test]
fn test_line_field_value_anchors_label() {
    assert_eq!(line_field_value(REPORT, "Port:"), "");
    assert_eq!(line_field_value(REPORT, "Source Port:"), "4444");
    assert_eq!(line_field_value("  Port: 22 \nDestination Port: 443", "Port:"), "22");
    assert_eq!(line_field_value("Destination Port: 443\nPort: 22", "Port:"), "22");
    assert_eq!(line_field_value(REPORT, ""), "");
}

#[test]
fn test_block_around_returns_paragraph() {
    let block = block_around(REPORT, "Source Port");
    assert_eq!(
        block,
        "We observed the following activity:\n\
Source IP: 192.0.2.10\n\
Source Port: 4444\n\
Timestamp: 2024-01-02 15:04:05 UTC"
    );
}

#[test]
fn test_block_around_at_text_edges() {
    assert_eq!(block_around("first\nsecond\n\nthird", "first"), "first\nsecond");
    assert_eq!(block_around("first\n\nthird\nlast", "last"), "third\nlast");
    assert_eq!(block_around("only", "only"), "only");
}

#[test]
fn test_block_around_missing_marker() {
    assert_eq!(block_around(REPORT, "not present"), "");
}

#[test]
fn test_block_after_until_stop_skips_leading_blank_run() {
    let block = block_after_until_stop(REPORT, "Infringing URLs:", "");
    assert_eq!(
        block,
        "  http://files.example/movie.mkv\n  http://files.example/movie2.mkv"
    );
}

#[test]
fn test_block_after_until_stop_stops_at_stop_marker() {
    let text = "Header\nline one\nline two\n--- end ---\nline three\n";
    assert_eq!(
        block_after_until_stop(text, "Header", "--- end"),
        "line one\nline two"
    );
}

#[test]
fn test_block_after_until_stop_only_skips_one_blank_run() {
    let text = "Header\n\n\nline one\n\nline two\n";
    assert_eq!(block_after_until_stop(text, "Header", ""), "line one");
}

#[test]
fn test_block_after_until_stop_missing_marker() {
    assert_eq!(block_after_until_stop(REPORT, "Absent", ""), "");
}

#[test]
fn test_continuous_lines_until_blank_trims_each_line() {
    assert_eq!(
        continuous_lines_until_blank(REPORT, "Infringing URLs:"),
        vec![
            "http://files.example/movie.mkv".to_string(),
            "http://files.example/movie2.mkv".to_string(),
        ]
    );
}

#[test]
fn test_continuous_lines_until_blank_nothing_after_marker() {
    assert!(continuous_lines_until_blank("Infringing URLs:", "Infringing URLs:").is_empty());
    assert!(continuous_lines_until_blank("Infringing URLs:\n\n\n", "Infringing URLs:").is_empty());
}

#[test]
fn test_first_nonempty_line_after() {
    assert_eq!(first_nonempty_line_after(REPORT, "Regards,"), "The Team");
    assert_eq!(
        first_nonempty_line_after(REPORT, "Infringing URLs:"),
        "http://files.example/movie.mkv"
    );
}

#[test]
fn test_first_nonempty_line_after_none_left() {
    assert_eq!(first_nonempty_line_after("Marker\n\n   \n", "Marker"), "");
    assert_eq!(first_nonempty_line_after(REPORT, "Absent"), "");
}

proptest! {
    #[test]
    fn test_find_between_round_trip(
        prefix in "[a-z ]{0,20}",
        middle in "[a-z0-9 .]{0,40}",
        suffix in "[a-z ]{0,20}",
    ) {
        // markers use characters the generated parts never contain
        let text = format!("{prefix}<<{middle}>>{suffix}");
        prop_assert_eq!(find_between(&text, "<<", ">>"), middle.as_str());
    }

    #[test]
    fn test_extractors_never_panic(
        text in "(?s).{0,200}",
        start in ".{0,5}",
        end in ".{0,5}",
    ) {
        let _ = find_between(&text, &start, &end);
        let _ = find_between_on_line(&text, &start, &end);
        let _ = find_all_between(&text, &start, &end);
        let _ = field_value(&text, &start);
        let _ = block_around(&text, &start);
        let _ = block_after_until_stop(&text, &start, &end);
        let _ = continuous_lines_until_blank(&text, &start);
        let _ = first_nonempty_line_after(&text, &start);
    }
}
