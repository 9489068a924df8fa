//! Block-tag template integration.
//!
//! This crate provides the host side of custom block tags written with
//! `{% name markup %}` … `{% endname %}` syntax, plus `{{ variable }}` output.
//!
//! # Architecture
//!
//! Tags use a two-phase model:
//!
//! 1. **Compile** ([`TemplateEngine::compile`]): each opening tag's markup is
//!    handed to the registered [`BlockTag`], which validates it and returns a
//!    [`BlockNode`]. Any error aborts compilation, so a malformed tag is caught
//!    before a page is rendered.
//!
//! 2. **Render** ([`Template::render`]): the raw body between the tag
//!    delimiters is collected (rendering nested tags and variables first) and
//!    passed to [`BlockNode::render`] together with the [`RenderContext`].
//!
//! # Example
//!
//! ```
//! use sombra_config::Config;
//! use sombra_tags::{BlockNode, BlockTag, RenderContext, SyntaxError, TemplateEngine};
//!
//! struct Shout;
//! struct ShoutNode;
//!
//! impl BlockTag for Shout {
//!     fn name(&self) -> &str { "shout" }
//!
//!     fn parse(&self, _markup: &str) -> Result<Box<dyn BlockNode>, SyntaxError> {
//!         Ok(Box::new(ShoutNode))
//!     }
//! }
//!
//! impl BlockNode for ShoutNode {
//!     fn render(&self, body: &str, _ctx: &RenderContext<'_>) -> String {
//!         body.to_uppercase()
//!     }
//! }
//!
//! let engine = TemplateEngine::new().with_tag(Shout);
//! let template = engine.compile("{% shout %}hello {{ name }}{% endshout %}").unwrap();
//!
//! let config = Config::default();
//! let ctx = RenderContext::new(&config).with_var("name", "world");
//! assert_eq!(template.render(&ctx), "HELLO WORLD");
//! ```

mod block;
mod context;
mod engine;
mod error;
mod lexer;
mod util;

pub use block::{BlockNode, BlockTag};
pub use context::{HIGHLIGHTER_PREFIX, HIGHLIGHTER_SUFFIX, RenderContext};
pub use engine::{Template, TemplateEngine};
pub use error::{SyntaxError, TagError};
pub use util::{is_strip_char, strip};
