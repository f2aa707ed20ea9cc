//! Marker-based text extraction.
//!
//! Report bodies are free text whose layout drifts between vendors and even
//! between reports of the same vendor. Every function here is total: a
//! missing marker yields an empty result (`""`, `None` or an empty `Vec`),
//! never a panic, and the caller decides whether the absence matters.
//!
//! Matching is case-sensitive. Callers that need case-insensitive matching
//! lower-case the text and the markers themselves.
//!
//! Two "rest of input" contracts exist and are exposed separately:
//! - `find_between` runs to the end of the *text* when the end marker is
//!   empty or missing.
//! - `find_between_on_line` never crosses the end of the line holding the
//!   start marker.

pub mod csv;

/// Locates the span strictly between the first `start` and the following `end`.
///
/// Returns `None` when `start` does not occur. An empty `end`, or an `end`
/// that never occurs after `start`, selects everything up to the end of the
/// text.
pub fn locate_between<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let after = text_after(text, start)?;
    if end.is_empty() {
        return Some(after);
    }
    Some(after.find(end).map_or(after, |pos| &after[..pos]))
}

/// Returns the text between `start` and `end`, or `""` if `start` is absent.
///
/// See [`locate_between`] for the end-marker rules. The result is not
/// trimmed.
///
/// # Examples
///
/// ```
/// use abuse_events::extract::find_between;
///
/// let text = "Source IP: 192.0.2.1\nPort: 22";
/// assert_eq!(find_between(text, "Source IP: ", "\n"), "192.0.2.1");
/// assert_eq!(find_between(text, "Port: ", ""), "22");
/// assert_eq!(find_between(text, "Missing", "\n"), "");
/// ```
pub fn find_between<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    locate_between(text, start, end).unwrap_or("")
}

/// Like [`locate_between`], but bounded by the end of the line holding `start`.
pub fn locate_between_on_line<'a>(text: &'a str, start: &str, end: &str) -> Option<&'a str> {
    let after = text_after(text, start)?;
    let line = after.split('\n').next().unwrap_or("");
    let line = line.strip_suffix('\r').unwrap_or(line);
    if end.is_empty() {
        return Some(line);
    }
    Some(line.find(end).map_or(line, |pos| &line[..pos]))
}

/// Like [`find_between`], but never reads past the end of the start marker's line.
pub fn find_between_on_line<'a>(text: &'a str, start: &str, end: &str) -> &'a str {
    locate_between_on_line(text, start, end).unwrap_or("")
}

/// Returns every `start..end` span in order, without overlap.
///
/// A final span whose `end` is missing runs to the end of the text. An empty
/// `start` marker matches nothing.
pub fn find_all_between<'a>(text: &'a str, start: &str, end: &str) -> Vec<&'a str> {
    let mut found = Vec::new();
    if start.is_empty() {
        return found;
    }

    let mut rest = text;
    while let Some(after) = text_after(rest, start) {
        if end.is_empty() {
            found.push(after);
            break;
        }
        match after.find(end) {
            Some(pos) => {
                found.push(&after[..pos]);
                rest = &after[pos + end.len()..];
            }
            None => {
                found.push(after);
                break;
            }
        }
    }
    found
}

/// Returns the trimmed rest of the line following `label`.
///
/// This is the `Label: value` shape most reports use for single fields.
pub fn field_value<'a>(text: &'a str, label: &str) -> &'a str {
    locate_between_on_line(text, label, "")
        .map(str::trim)
        .unwrap_or("")
}

/// Like [`field_value`], but `label` must start its line (after indentation).
///
/// Use it for short labels that also end longer ones, such as `Port:` inside
/// `Destination Port:`.
///
/// ```
/// use abuse_events::extract::line_field_value;
///
/// let text = "Destination Port: 443\nPort: 22";
/// assert_eq!(line_field_value(text, "Port:"), "22");
/// ```
pub fn line_field_value<'a>(text: &'a str, label: &str) -> &'a str {
    if label.is_empty() {
        return "";
    }
    text.lines()
        .find_map(|line| line.trim_start().strip_prefix(label))
        .map(str::trim)
        .unwrap_or("")
}

/// Returns the paragraph containing the first line that contains `marker`.
///
/// The paragraph extends in both directions until a blank line or the edge of
/// the text. Lines are joined with `\n`.
pub fn block_around(text: &str, marker: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let Some(hit) = lines.iter().position(|line| line.contains(marker)) else {
        return String::new();
    };

    let mut first = hit;
    while first > 0 && !is_blank(lines[first - 1]) {
        first -= 1;
    }
    let mut last = hit;
    while last + 1 < lines.len() && !is_blank(lines[last + 1]) {
        last += 1;
    }

    lines[first..=last].join("\n")
}

/// Returns the non-blank lines following the line that contains `marker`.
///
/// A blank run directly after the marker line is skipped once. Collection
/// stops at the next blank line, or at the first line containing
/// `stop_marker` when it is not empty. Lines are joined with `\n` and left
/// untrimmed.
pub fn block_after_until_stop(text: &str, marker: &str, stop_marker: &str) -> String {
    lines_after_marker(text, marker, stop_marker).join("\n")
}

/// Returns the trimmed lines of the block under a labelled line.
///
/// Typical input is a list such as:
///
/// ```text
/// Infringing URLs:
///   http://a.example/1
///   http://a.example/2
///
/// Footer
/// ```
pub fn continuous_lines_until_blank(text: &str, marker: &str) -> Vec<String> {
    lines_after_marker(text, marker, "")
        .into_iter()
        .map(|line| line.trim().to_string())
        .collect()
}

/// Returns the first line with content after the line containing `marker`.
///
/// Blank lines are skipped. The result is trimmed; `""` when the marker is
/// absent or nothing follows it.
pub fn first_nonempty_line_after<'a>(text: &'a str, marker: &str) -> &'a str {
    let mut lines = text.lines().skip_while(|line| !line.contains(marker));
    if lines.next().is_none() {
        return "";
    }
    lines
        .find(|line| !is_blank(line))
        .map(str::trim)
        .unwrap_or("")
}

fn lines_after_marker<'a>(text: &'a str, marker: &str, stop_marker: &str) -> Vec<&'a str> {
    let mut lines = text.lines().skip_while(|line| !line.contains(marker));
    if lines.next().is_none() {
        return Vec::new();
    }
    lines
        .skip_while(|line| is_blank(line))
        .take_while(|line| {
            !is_blank(line) && (stop_marker.is_empty() || !line.contains(stop_marker))
        })
        .collect()
}

fn text_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.find(marker).map(|idx| &text[idx + marker.len()..])
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
