//! URL cleaning, validation and extraction.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::utils::compile_regex_unsafe;

// `hxxp` only in scheme position: at the start or after a delimiter, followed by `:` or `[:`.
const HXXP_PATTERN: &str = r#"(?i)(^|[\s<>("'*\[])hxxp(s?)(:|\[:)"#;
const URL_PATTERN: &str = r#"(?i)\b(?:https?|hxxps?)(?:://|\[://\]|\[:\]//)[^\s<>"'`]+"#;
const BARE_DOMAIN_PATTERN: &str = r"(?i)^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z][a-z0-9-]{0,61}[a-z0-9](?::\d{1,5})?(?:[/?#]\S*)?$";

static HXXP_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(HXXP_PATTERN, "HXXP_RE"));
static URL_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(URL_PATTERN, "URL_RE"));
static BARE_DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(BARE_DOMAIN_PATTERN, "BARE_DOMAIN_RE"));

// Sentence punctuation that ends up glued to URLs in prose.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

/// Reverses URL defanging and strips surrounding noise.
///
/// - `hxxp`/`hXXps` in scheme position become `http`/`https`
/// - `[.]`, `(.)` and `{.}` become `.`, `[:]` becomes `:`, `[://]` becomes `://`
/// - surrounding whitespace, `*` and angle brackets are removed
///
/// Path and query are otherwise left untouched. The rewrite runs to a fixed
/// point, so `clean_url(&clean_url(s)) == clean_url(s)`.
///
/// # Examples
///
/// ```
/// use abuse_events::identifier::clean_url;
///
/// assert_eq!(clean_url(" *hxxps://evil[.]example/login?a=1* "), "https://evil.example/login?a=1");
/// ```
pub fn clean_url(s: &str) -> String {
    let mut current = clean_url_once(s);
    loop {
        let next = clean_url_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

// Each pass only shortens the string or removes an `hxxp`, so the loop in
// `clean_url` terminates.
fn clean_url_once(s: &str) -> String {
    let trimmed = s.trim_matches(|c: char| c.is_whitespace() || matches!(c, '*' | '<' | '>'));
    HXXP_RE
        .replace_all(trimmed, |caps: &Captures| {
            format!("{}http{}{}", &caps[1], caps[2].to_ascii_lowercase(), &caps[3])
        })
        .replace("[://]", "://")
        .replace("[:]", ":")
        .replace("[.]", ".")
        .replace("(.)", ".")
        .replace("{.}", ".")
}

/// True if `s` looks like a URL.
///
/// After trimming, `s` must either start with `http://` or `https://`
/// (case-insensitive) and parse with a non-empty host, or be shaped like a
/// bare domain (`host.example.tld` with optional port and path).
pub fn is_url(s: &str) -> bool {
    let s = s.trim();
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return ::url::Url::parse(s)
            .map(|parsed| parsed.host_str().is_some_and(|host| !host.is_empty()))
            .unwrap_or(false);
    }

    BARE_DOMAIN_RE.is_match(s)
}

/// Returns every http(s) URL in `text`, cleaned and deduplicated, in order.
///
/// Defanged schemes (`hxxp`, `hxxps`, `[://]`) are recognized. Sentence
/// punctuation glued to the end of a URL is removed.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in URL_RE.find_iter(text) {
        let cleaned = clean_url(m.as_str().trim_end_matches(TRAILING_PUNCTUATION));
        if is_url(&cleaned) && !found.contains(&cleaned) {
            found.push(cleaned);
        }
    }
    found
}

/// Returns the lower-cased host of a URL or bare domain.
///
/// Returns `None` when no host can be parsed.
pub fn url_host(s: &str) -> Option<String> {
    let cleaned = clean_url(s);
    if cleaned.is_empty() {
        return None;
    }
    let with_scheme = if cleaned.contains("://") {
        cleaned
    } else {
        format!("http://{cleaned}")
    };

    let parsed = ::url::Url::parse(&with_scheme).ok()?;
    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_lowercase)
}
