//! Plain-text backend.

use crate::{HighlightBackend, HighlightError, wrap_highlight};

/// Emits the code HTML-escaped, without token markup.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainBackend;

impl HighlightBackend for PlainBackend {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn highlight(&self, code: &str, _lang: &str) -> Result<String, HighlightError> {
        Ok(wrap_highlight(&escape_html(code)))
    }
}

/// Escape HTML special characters.
///
/// Covers `&`, `<`, `>`, `"` and `'`. The apostrophe is escaped as well so
/// the output is safe inside single-quoted attribute values, not only in
/// text content.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
