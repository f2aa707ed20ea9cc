//! Utilities for sanitizing report text used as error context.
//!
//! Subjects and body excerpts end up in error messages and logs, so control
//! characters are removed and long values are cut to a bounded snippet.

/// Removes control characters, keeping newline, tab and carriage return.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 || code == 0x09 || code == 0x0A || code == 0x0D
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Sanitizes `text`, collapses it onto one line and cuts it to `max_chars`.
///
/// A cut snippet ends with `...`. Cutting is done on character boundaries.
pub fn snippet(text: &str, max_chars: usize) -> String {
    let sanitized = sanitize_error_message(text);
    let single_line = sanitized.split_whitespace().collect::<Vec<_>>().join(" ");

    match single_line.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &single_line[..cut]),
        None => single_line,
    }
}
