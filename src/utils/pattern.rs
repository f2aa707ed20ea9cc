//! Static regex compilation.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// Used for the `LazyLock<Regex>` statics of the extraction modules. Input
/// text never reaches this function, only patterns written in the source.
///
/// # Panics
///
/// Panics if the pattern does not compile (indicates a programming error).
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_regex_unsafe_valid() {
        let re = compile_regex_unsafe(r"^\d+$", "test");
        assert!(re.is_match("123"));
    }

    #[test]
    #[should_panic(expected = "This is a programming error")]
    fn test_compile_regex_unsafe_invalid_panics() {
        let _ = compile_regex_unsafe(r"(unclosed", "test");
    }
}
