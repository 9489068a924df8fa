//! Template compilation errors.

/// Invalid markup in an opening tag, reported by a [`BlockTag`](crate::BlockTag).
///
/// The message echoes the offending markup and the accepted grammar:
///
/// ```
/// use sombra_tags::SyntaxError;
///
/// let err = SyntaxError::new("example", "python", "example <html|css|js>");
/// assert_eq!(
///     err.to_string(),
///     "Invalid syntax: '{% example python %}'. Expected: {% example <html|css|js> %}."
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid syntax: '{{% {tag} {markup} %}}'. Expected: {{% {expected} %}}.")]
pub struct SyntaxError {
    /// Tag name as written in the template.
    pub tag: String,
    /// Raw markup following the tag name.
    pub markup: String,
    /// Accepted grammar, without delimiters.
    pub expected: String,
}

impl SyntaxError {
    /// Create a syntax error for `tag` with the given markup and grammar.
    pub fn new(
        tag: impl Into<String>,
        markup: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            markup: markup.into(),
            expected: expected.into(),
        }
    }
}

/// Error returned when a template fails to compile.
///
/// Every variant carries the 1-indexed line of the offending delimiter.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// A registered tag rejected its markup.
    #[error("line {line}: {source}")]
    Syntax {
        /// Line of the opening tag.
        line: usize,
        /// Error reported by the tag.
        source: SyntaxError,
    },
    /// `{% %}` with no tag name.
    #[error("line {line}: tag is missing a name")]
    MissingName {
        /// Line of the tag.
        line: usize,
    },
    /// No tag registered under this name.
    #[error("line {line}: unknown tag '{name}'")]
    UnknownTag {
        /// Tag name as written.
        name: String,
        /// Line of the tag.
        line: usize,
    },
    /// An opening tag has no matching `end` tag.
    #[error("line {line}: '{name}' tag was never closed")]
    UnclosedBlock {
        /// Tag name of the open block.
        name: String,
        /// Line of the opening tag.
        line: usize,
    },
    /// An `end` tag without an open block.
    #[error("line {line}: '{name}' is not a valid delimiter here")]
    StrayEnd {
        /// End tag name as written.
        name: String,
        /// Line of the end tag.
        line: usize,
    },
    /// An `end` tag closing a different block than the innermost open one.
    #[error("line {line}: '{found}' does not close '{expected}'")]
    MismatchedEnd {
        /// Name of the innermost open block.
        expected: String,
        /// End tag name as written.
        found: String,
        /// Line of the end tag.
        line: usize,
    },
    /// `{%` or `{{` without its closing delimiter.
    #[error("line {line}: '{delimiter}' was not properly terminated")]
    Unterminated {
        /// Opening delimiter.
        delimiter: &'static str,
        /// Line of the opening delimiter.
        line: usize,
    },
}
