//! Template compilation and rendering.

use crate::lexer::{Token, tokenize};
use crate::{BlockNode, BlockTag, RenderContext, TagError};

/// Prefix that turns a tag name into its closing tag.
const END_PREFIX: &str = "end";

/// Registry of block tags that compiles templates.
///
/// # Example
///
/// ```
/// use sombra_config::Config;
/// use sombra_tags::{RenderContext, TemplateEngine};
///
/// let engine = TemplateEngine::new();
/// let template = engine.compile("Hello {{ name }}").unwrap();
///
/// let config = Config::default();
/// let ctx = RenderContext::new(&config).with_var("name", "Ada");
/// assert_eq!(template.render(&ctx), "Hello Ada");
/// ```
#[derive(Default)]
pub struct TemplateEngine {
    tags: Vec<Box<dyn BlockTag>>,
}

impl TemplateEngine {
    /// Create an engine with no tags registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a block tag.
    ///
    /// A later registration with the same name shadows an earlier one.
    #[must_use]
    pub fn with_tag<T: BlockTag + 'static>(mut self, tag: T) -> Self {
        self.tags.push(Box::new(tag));
        self
    }

    /// Look up a registered tag by name.
    fn find(&self, name: &str) -> Option<&dyn BlockTag> {
        self.tags
            .iter()
            .rev()
            .find(|t| t.name() == name)
            .map(|t| &**t)
    }

    /// Compile a template.
    ///
    /// Every tag occurrence is parsed here, so invalid markup, unknown tags and
    /// unbalanced blocks are reported before anything is rendered.
    pub fn compile(&self, source: &str) -> Result<Template, TagError> {
        let mut root: Vec<Node> = Vec::new();
        let mut stack: Vec<OpenBlock> = Vec::new();

        for token in tokenize(source)? {
            let node = match token {
                Token::Text(text) => Node::Text(text.to_owned()),
                Token::Output { expr, .. } => Node::Output(expr.to_owned()),
                Token::Tag { name, markup, line } => {
                    if let Some(tag) = self.find(name) {
                        let node = tag
                            .parse(markup)
                            .map_err(|source| TagError::Syntax { line, source })?;
                        tracing::trace!(tag = name, line, "Opened block");
                        stack.push(OpenBlock {
                            name: name.to_owned(),
                            line,
                            node,
                            children: Vec::new(),
                        });
                        continue;
                    }

                    let Some(target) = name.strip_prefix(END_PREFIX) else {
                        return Err(TagError::UnknownTag {
                            name: name.to_owned(),
                            line,
                        });
                    };

                    let Some(open) = stack.pop() else {
                        return Err(TagError::StrayEnd {
                            name: name.to_owned(),
                            line,
                        });
                    };

                    if open.name != target {
                        return Err(TagError::MismatchedEnd {
                            expected: open.name,
                            found: name.to_owned(),
                            line,
                        });
                    }

                    Node::Block {
                        node: open.node,
                        children: open.children,
                    }
                }
            };

            match stack.last_mut() {
                Some(open) => open.children.push(node),
                None => root.push(node),
            }
        }

        if let Some(open) = stack.pop() {
            return Err(TagError::UnclosedBlock {
                name: open.name,
                line: open.line,
            });
        }

        tracing::debug!(nodes = root.len(), "Compiled template");
        Ok(Template { nodes: root })
    }

    /// Compile and render a template in one step.
    pub fn render(&self, source: &str, ctx: &RenderContext<'_>) -> Result<String, TagError> {
        Ok(self.compile(source)?.render(ctx))
    }
}

/// A block whose end tag has not been seen yet.
struct OpenBlock {
    name: String,
    line: usize,
    node: Box<dyn BlockNode>,
    children: Vec<Node>,
}

enum Node {
    Text(String),
    Output(String),
    Block {
        node: Box<dyn BlockNode>,
        children: Vec<Node>,
    },
}

/// A compiled template.
///
/// Immutable; render it as many times as needed, from any thread.
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Render the template with the given context.
    #[must_use]
    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        let mut output = String::new();
        render_nodes(&self.nodes, ctx, &mut output);
        output
    }
}

fn render_nodes(nodes: &[Node], ctx: &RenderContext<'_>, output: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => output.push_str(text),
            Node::Output(expr) => match ctx.get(expr) {
                Some(value) => output.push_str(value),
                None => tracing::trace!(variable = %expr, "Undefined variable"),
            },
            Node::Block { node, children } => {
                let mut body = String::new();
                render_nodes(children, ctx, &mut body);
                output.push_str(&node.render(&body, ctx));
            }
        }
    }
}
