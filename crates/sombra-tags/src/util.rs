//! Shared string helpers for tag markup and block bodies.

/// Whitespace recognised around tag markup and block bodies.
///
/// ASCII space, tab, line feed, vertical tab, form feed, carriage return and
/// NUL. Unicode spaces such as U+00A0 are content, not padding.
#[must_use]
pub fn is_strip_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '\0')
}

/// Strip leading and trailing [`is_strip_char`] characters.
///
/// ```
/// assert_eq!(sombra_tags::strip("\t html \0"), "html");
/// assert_eq!(sombra_tags::strip("\u{a0}html"), "\u{a0}html");
/// ```
#[must_use]
pub fn strip(s: &str) -> &str {
    s.trim_matches(is_strip_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ascii_whitespace() {
        assert_eq!(strip(" \t\n\x0B\x0C\r css \r\n"), "css");
    }

    #[test]
    fn test_strip_nul() {
        assert_eq!(strip("\0js\0"), "js");
    }

    #[test]
    fn test_strip_keeps_unicode_spaces() {
        assert_eq!(strip("\u{a0}a{}\u{a0}"), "\u{a0}a{}\u{a0}");
        assert_eq!(strip("\u{2003}x"), "\u{2003}x");
    }

    #[test]
    fn test_strip_keeps_inner_whitespace() {
        assert_eq!(strip("  a  b  "), "a  b");
    }
}
