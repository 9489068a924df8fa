//! Pluggable syntax highlighting backends.
//!
//! Every backend turns a code string and a language token into a complete
//! HTML fragment of the form
//!
//! ```text
//! <div class="highlight"><pre>…</pre></div>
//! ```
//!
//! The active backend is chosen by [`HighlighterKind`], a closed set read from
//! site configuration. [`backend_for`] maps each kind to a shared backend
//! instance; [`HighlighterKind::None`] maps to no backend at all.
//!
//! # Example
//!
//! ```
//! use sombra_config::HighlighterKind;
//! use sombra_highlight::backend_for;
//!
//! let backend = backend_for(HighlighterKind::Plain).unwrap();
//! let html = backend.highlight("a < b", "js").unwrap();
//! assert_eq!(html, r#"<div class="highlight"><pre>a &lt; b</pre></div>"#);
//! ```

mod classed;
mod plain;

use std::sync::LazyLock;

pub use classed::SyntectBackend;
pub use plain::{PlainBackend, escape_html};
pub use sombra_config::HighlighterKind;

/// Error returned when a backend fails to highlight code.
#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    /// Syntect failed while parsing a line.
    #[error("syntax highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

/// A syntax highlighting backend.
///
/// Backends must tolerate languages they don't recognise by falling back to a
/// plain-text rendering rather than returning an error.
pub trait HighlightBackend: Send + Sync {
    /// Backend identifier, used in log fields.
    fn name(&self) -> &str;

    /// Highlight `code` as `lang`, returning a `<div class="highlight"><pre>` fragment.
    fn highlight(&self, code: &str, lang: &str) -> Result<String, HighlightError>;
}

static SYNTECT: LazyLock<SyntectBackend> = LazyLock::new(SyntectBackend::new);

/// Resolve the shared backend for a configured highlighter.
///
/// The syntect syntax set is loaded on first use and reused afterwards.
/// Returns `None` for [`HighlighterKind::None`].
#[must_use]
pub fn backend_for(kind: HighlighterKind) -> Option<&'static dyn HighlightBackend> {
    match kind {
        HighlighterKind::Syntect => Some(&*SYNTECT),
        HighlighterKind::Plain => Some(&PlainBackend),
        HighlighterKind::None => None,
    }
}

/// Wrap backend output in the shared highlight container.
pub(crate) fn wrap_highlight(inner: &str) -> String {
    format!(r#"<div class="highlight"><pre>{inner}</pre></div>"#)
}
