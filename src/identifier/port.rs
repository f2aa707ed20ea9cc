//! Port parsing.

/// Parses a decimal port number in `0..=65535`.
///
/// Surrounding whitespace is ignored. Signs, separators, non-digits and
/// out-of-range values are rejected.
pub fn parse_port(s: &str) -> Option<u16> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u16>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port("0"), Some(0));
        assert_eq!(parse_port("22"), Some(22));
        assert_eq!(parse_port(" 8080 "), Some(8080));
        assert_eq!(parse_port("65535"), Some(65535));
        assert_eq!(parse_port("0080"), Some(80));
    }

    #[test]
    fn test_parse_port_rejects_invalid() {
        assert_eq!(parse_port(""), None);
        assert_eq!(parse_port("65536"), None);
        assert_eq!(parse_port("-1"), None);
        assert_eq!(parse_port("+80"), None);
        assert_eq!(parse_port("80/tcp"), None);
        assert_eq!(parse_port("99999999999999999999"), None);
    }
}
