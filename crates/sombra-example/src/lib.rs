//! The `example` block tag.
//!
//! Renders a snippet of HTML, CSS or JavaScript twice: once verbatim inside a
//! `sombra-example` container (so the page shows the live result) and once
//! syntax-highlighted inside a `highlight` container.
//!
//! ```text
//! {% example html %}
//! <button class="btn">Click</button>
//! {% endexample %}
//! ```
//!
//! renders as
//!
//! ```text
//! <div class="sombra-example">
//! <button class="btn">Click</button>
//! </div><div class="highlight"><pre><code class="language-html" data-lang="html">…</code></pre></div>
//! ```
//!
//! The `highlighter_prefix` and `highlighter_suffix` context variables are
//! emitted immediately before and after the whole block.
//!
//! # Example
//!
//! ```
//! use sombra_config::Config;
//! use sombra_tags::{RenderContext, TemplateEngine};
//!
//! let engine = sombra_example::register(TemplateEngine::new());
//! let template = engine.compile("{% example css %} a { b: c } {% endexample %}").unwrap();
//!
//! let config = Config::parse("[highlight]\nbackend = \"plain\"\n").unwrap();
//! let html = template.render(&RenderContext::new(&config));
//! assert!(html.starts_with("<div class=\"sombra-example\">\na { b: c }\n</div>"));
//! ```

mod language;
mod markup;
mod tag;

pub use language::LanguageSelector;
pub use markup::{add_code_tag, example_fragment};
pub use tag::{ExampleBlock, ExampleTag};

use sombra_tags::TemplateEngine;

/// Name of the tag in templates.
pub const TAG_NAME: &str = "example";

/// Register the `example` tag with an engine.
#[must_use]
pub fn register(engine: TemplateEngine) -> TemplateEngine {
    engine.with_tag(ExampleTag)
}
