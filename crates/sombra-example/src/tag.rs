//! `example` tag and its compiled node.

use sombra_highlight::{HighlightBackend, PlainBackend, backend_for};
use sombra_tags::{
    BlockNode, BlockTag, HIGHLIGHTER_PREFIX, HIGHLIGHTER_SUFFIX, RenderContext, SyntaxError,
};

use crate::markup::{add_code_tag, example_fragment};
use crate::{LanguageSelector, TAG_NAME};

/// Tag factory for `{% example <html|css|js> %}` … `{% endexample %}`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExampleTag;

impl BlockTag for ExampleTag {
    fn name(&self) -> &'static str {
        TAG_NAME
    }

    fn parse(&self, markup: &str) -> Result<Box<dyn BlockNode>, SyntaxError> {
        Ok(Box::new(ExampleBlock::parse(markup)?))
    }
}

/// A compiled `example` block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleBlock {
    lang: LanguageSelector,
}

impl ExampleBlock {
    /// Validate tag markup.
    ///
    /// Surrounding ASCII whitespace is stripped and the markup lower-cased before matching.
    pub fn parse(markup: &str) -> Result<Self, SyntaxError> {
        Ok(Self::new(markup.parse()?))
    }

    /// Create a block for an already validated selector.
    #[must_use]
    pub fn new(lang: LanguageSelector) -> Self {
        Self { lang }
    }

    /// Language of the block's body.
    #[must_use]
    pub fn lang(&self) -> LanguageSelector {
        self.lang
    }

    /// Render `body` with an explicit backend instead of the configured one.
    fn render_with(
        &self,
        body: &str,
        ctx: &RenderContext<'_>,
        backend: Option<&dyn HighlightBackend>,
    ) -> String {
        let prefix = ctx.get(HIGHLIGHTER_PREFIX).unwrap_or_default();
        let suffix = ctx.get(HIGHLIGHTER_SUFFIX).unwrap_or_default();
        let code = sombra_tags::strip(body);

        let example = example_fragment(code);
        let highlighted = self.highlight_with(backend, code, ctx);
        let highlighted = add_code_tag(&highlighted, self.lang.as_str());

        let mut output =
            String::with_capacity(prefix.len() + example.len() + highlighted.len() + suffix.len());
        output.push_str(prefix);
        output.push_str(&example);
        output.push_str(&highlighted);
        output.push_str(suffix);
        output
    }

    /// Highlight `code` with `backend`.
    ///
    /// Returns an empty string when there is no backend. A backend error is
    /// logged and replaced by plain-text output.
    fn highlight_with(
        &self,
        backend: Option<&dyn HighlightBackend>,
        code: &str,
        ctx: &RenderContext<'_>,
    ) -> String {
        let lang = self.lang.as_str();
        let Some(backend) = backend else {
            return String::new();
        };

        match backend.highlight(code, lang) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    backend = backend.name(),
                    lang,
                    source = ?ctx.source_path,
                    error = %e,
                    "Highlighting failed, using plain text"
                );
                PlainBackend.highlight(code, lang).unwrap_or_default()
            }
        }
    }
}

impl BlockNode for ExampleBlock {
    fn render(&self, body: &str, ctx: &RenderContext<'_>) -> String {
        self.render_with(body, ctx, backend_for(ctx.highlighter()))
    }
}
