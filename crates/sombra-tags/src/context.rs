//! Render context.
//!
//! Provides page variables and site configuration to block nodes.

use std::collections::HashMap;
use std::path::Path;

use sombra_config::{Config, HighlighterKind};

/// Variable holding markup emitted before every highlighted block.
pub const HIGHLIGHTER_PREFIX: &str = "highlighter_prefix";

/// Variable holding markup emitted after every highlighted block.
pub const HIGHLIGHTER_SUFFIX: &str = "highlighter_suffix";

/// Read-only context supplied to every render call.
///
/// Created fresh for each page render. Nodes never mutate it.
///
/// # Example
///
/// ```
/// use sombra_config::Config;
/// use sombra_tags::{HIGHLIGHTER_PREFIX, RenderContext};
///
/// let config = Config::default();
/// let ctx = RenderContext::new(&config).with_var(HIGHLIGHTER_PREFIX, "<figure>");
///
/// assert_eq!(ctx.get(HIGHLIGHTER_PREFIX), Some("<figure>"));
/// assert_eq!(ctx.get("missing"), None);
/// ```
#[derive(Debug)]
pub struct RenderContext<'a> {
    /// Site configuration.
    pub site: &'a Config,
    /// Path to the template being rendered (if known), for log fields.
    pub source_path: Option<&'a Path>,
    vars: HashMap<String, String>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for `site`.
    ///
    /// `highlighter_prefix` and `highlighter_suffix` are seeded from the
    /// site's `[highlight]` section when set there.
    #[must_use]
    pub fn new(site: &'a Config) -> Self {
        let mut vars = HashMap::new();
        if let Some(prefix) = &site.highlight.prefix {
            vars.insert(HIGHLIGHTER_PREFIX.to_owned(), prefix.clone());
        }
        if let Some(suffix) = &site.highlight.suffix {
            vars.insert(HIGHLIGHTER_SUFFIX.to_owned(), suffix.clone());
        }

        Self {
            site,
            source_path: None,
            vars,
        }
    }

    /// Set the template path.
    #[must_use]
    pub fn with_source_path(mut self, source_path: &'a Path) -> Self {
        self.source_path = Some(source_path);
        self
    }

    /// Set a variable, replacing any previous value.
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Look up a variable.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Highlighting backend configured for the site.
    #[must_use]
    pub fn highlighter(&self) -> HighlighterKind {
        self.site.highlight.backend
    }
}
