//! Class-based highlighting with syntect.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::{HighlightBackend, HighlightError, wrap_highlight};

/// Highlights code into `<span class="…">` tokens using syntect's default grammars.
///
/// Token classes are scope names (`source js`, `entity name tag html`, …), so
/// styling is left to the site's stylesheet.
#[derive(Debug)]
pub struct SyntectBackend {
    syntax_set: SyntaxSet,
}

impl SyntectBackend {
    /// Create a backend with syntect's bundled syntax definitions.
    #[must_use]
    pub fn new() -> Self {
        tracing::debug!("Loading syntect syntax set");
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    /// Returns a reference to the syntax set.
    pub fn syntax_set(&self) -> &SyntaxSet {
        &self.syntax_set
    }
}

impl Default for SyntectBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightBackend for SyntectBackend {
    fn name(&self) -> &'static str {
        "syntect"
    }

    fn highlight(&self, code: &str, lang: &str) -> Result<String, HighlightError> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }

        Ok(wrap_highlight(&generator.finalize()))
    }
}
