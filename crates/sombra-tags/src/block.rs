//! Block tag traits.
//!
//! Block tags use `{% name markup %}` … `{% endname %}` syntax.

use crate::{RenderContext, SyntaxError};

/// Factory for a block tag: `{% name markup %}` … `{% endname %}`.
///
/// One instance is registered with the [`TemplateEngine`](crate::TemplateEngine)
/// and asked to [`parse`](Self::parse) the markup of every occurrence of the tag.
///
/// # Thread Safety
///
/// Tags are `Send + Sync` so a single engine can compile templates from
/// several threads.
pub trait BlockTag: Send + Sync {
    /// Tag name (e.g., "example").
    ///
    /// The closing tag is this name prefixed with `end`.
    fn name(&self) -> &str;

    /// Validate the markup of an opening tag and build the node that renders it.
    ///
    /// Called once per occurrence, at compile time. Returning an error aborts
    /// compilation of the whole template.
    ///
    /// `markup` is everything after the tag name up to `%}`, with leading
    /// whitespace removed and trailing whitespace kept.
    fn parse(&self, markup: &str) -> Result<Box<dyn BlockNode>, SyntaxError>;
}

/// A compiled block tag occurrence.
///
/// Nodes are immutable after [`BlockTag::parse`] and may be rendered many
/// times, possibly concurrently.
pub trait BlockNode: Send + Sync {
    /// Render the block.
    ///
    /// `body` is the raw text collected between the tag delimiters, with
    /// nested tags and variables already rendered.
    fn render(&self, body: &str, ctx: &RenderContext<'_>) -> String;
}
