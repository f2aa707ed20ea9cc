//! HTML report bodies.
//!
//! Many vendors only send HTML mail. The extractors work on lines, so HTML is
//! flattened to text first: block elements become line breaks, paragraphs
//! and tables become blank-line separated blocks, table cells are separated
//! by spaces and `script`/`style`/`head` content is dropped.

use std::sync::LazyLock;

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

use crate::utils::parse_selector_unsafe;

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("tr", "ROW_SELECTOR"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("td, th", "CELL_SELECTOR"));

const SKIPPED: &[&str] = &["script", "style", "head", "noscript"];
const PARAGRAPHS: &[&str] = &[
    "p", "table", "ul", "ol", "blockquote", "pre", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
];
const BLOCKS: &[&str] = &[
    "div", "tr", "li", "dt", "dd", "section", "article", "header", "footer", "address",
    "center", "form", "fieldset", "caption",
];

/// True if `body` looks like an HTML document or fragment.
pub fn is_html(body: &str) -> bool {
    let head: String = body
        .trim_start()
        .chars()
        .take(2048)
        .collect::<String>()
        .to_ascii_lowercase();
    ["<html", "<!doctype html", "<body", "<table", "<div", "<p>", "<br"]
        .iter()
        .any(|tag| head.contains(tag))
}

/// Flattens an HTML document to plain text lines.
///
/// Every line is whitespace-collapsed and trimmed; runs of blank lines are
/// reduced to one and leading/trailing blank lines are removed.
///
/// # Examples
///
/// ```
/// use abuse_events::html::to_text;
///
/// let text = to_text("<p>Source: <b>192.0.2.1</b></p><p>Time: 2024-01-02</p>");
/// assert_eq!(text, "Source: 192.0.2.1\n\nTime: 2024-01-02");
/// ```
pub fn to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut raw = String::new();
    walk(document.root_element(), &mut raw);
    tidy_lines(&raw)
}

/// Returns the text of each table row, one `Vec` of cell texts per `<tr>`.
///
/// Rows without `td`/`th` cells are skipped.
pub fn table_rows(html: &str) -> Vec<Vec<String>> {
    let document = Html::parse_document(html);
    document
        .select(&ROW_SELECTOR)
        .map(|row| {
            row.select(&CELL_SELECTOR)
                .map(|cell| collapse(&cell.text().collect::<String>()))
                .collect::<Vec<_>>()
        })
        .filter(|cells| !cells.is_empty())
        .collect()
}

fn walk(element: ElementRef<'_>, out: &mut String) {
    let name = element.value().name();
    if SKIPPED.contains(&name) {
        return;
    }
    if name == "br" {
        out.push('\n');
        return;
    }

    let paragraph = PARAGRAPHS.contains(&name);
    let block = BLOCKS.contains(&name);
    let cell = name == "td" || name == "th";

    if paragraph {
        out.push_str("\n\n");
    } else if block {
        break_line(out);
    } else if cell {
        out.push(' ');
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                out.extend(text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
            }
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    walk(child_element, out);
                }
            }
            _ => {}
        }
    }

    if paragraph {
        out.push_str("\n\n");
    } else if block {
        break_line(out);
    } else if cell {
        out.push(' ');
    }
}

// Starts a new line unless the current one holds nothing but spaces.
fn break_line(out: &mut String) {
    if !out.trim_end_matches(' ').ends_with('\n') {
        out.push('\n');
    }
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn tidy_lines(raw: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in raw.lines().map(collapse) {
        let previous_blank = lines.last().map_or(true, |last| last.is_empty());
        if line.is_empty() && previous_blank {
            continue;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|last| last.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_text_blocks_and_breaks() {
        let html = "<html><head><title>Report</title><style>p { color: red }</style></head>\
                    <body><p>Source IP: 192.0.2.1</p>\
                    <div>Time: <b>2024-01-02</b></div>line<br>two</body></html>";
        assert_eq!(
            to_text(html),
            "Source IP: 192.0.2.1\n\nTime: 2024-01-02\nline\ntwo"
        );
    }

    #[test]
    fn test_to_text_skips_scripts_and_decodes_entities() {
        let html = "<body><script>var ip = '10.0.0.1';</script><p>A &amp; B&nbsp;C</p></body>";
        assert_eq!(to_text(html), "A & B C");
    }

    #[test]
    fn test_to_text_collapses_source_whitespace() {
        let html = "<p>\n   Reported\n   URL:\n   http://a.example/x\n</p>";
        assert_eq!(to_text(html), "Reported URL: http://a.example/x");
    }

    #[test]
    fn test_to_text_table() {
        let html = "<table><tr><th>IP</th><th>Port</th></tr>\
                    <tr><td>192.0.2.1</td><td>22</td></tr></table>";
        assert_eq!(to_text(html), "IP Port\n192.0.2.1 22");
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(""), "");
    }

    #[test]
    fn test_table_rows() {
        let html = "<table><tr><th>IP</th><th>Time</th></tr>\
                    <tr><td> 192.0.2.1 </td><td>2024-01-02\n 10:00</td></tr>\
                    <tr></tr></table>";
        assert_eq!(
            table_rows(html),
            vec![
                vec!["IP".to_string(), "Time".to_string()],
                vec!["192.0.2.1".to_string(), "2024-01-02 10:00".to_string()],
            ]
        );
    }

    #[test]
    fn test_is_html() {
        assert!(is_html("<!DOCTYPE html><html><body>x</body></html>"));
        assert!(is_html("  <p>hello</p>"));
        assert!(is_html("line one<br>line two"));
        assert!(!is_html("Plain text report\nIP: 192.0.2.1"));
        assert!(!is_html("a < b > c"));
    }
}
