//! Markup assembly for example blocks.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Opening `<pre>` emitted by a backend, with any newlines that follow it.
static PRE_OPEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<pre>\n*").unwrap());

/// Closing `</pre>`, with any newlines that precede it.
static PRE_CLOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n*</pre>").unwrap());

/// Wrap unhighlighted code in the `sombra-example` container.
///
/// ```
/// assert_eq!(
///     sombra_example::example_fragment("<p>hi</p>"),
///     "<div class=\"sombra-example\">\n<p>hi</p>\n</div>"
/// );
/// ```
#[must_use]
pub fn example_fragment(code: &str) -> String {
    format!("<div class=\"sombra-example\">\n{code}\n</div>")
}

/// Nest a `<code>` element inside the first `<pre>` of highlighted output.
///
/// The `<code>` carries `class="language-{lang}"` (with `+` replaced by `-`)
/// and `data-lang="{lang}"`. Newlines directly inside the `<pre>` are
/// dropped and the result is trimmed. Empty input stays empty.
///
/// ```
/// let html = sombra_example::add_code_tag(
///     "<div class=\"highlight\"><pre>\nx\n</pre></div>",
///     "c++",
/// );
/// assert_eq!(
///     html,
///     "<div class=\"highlight\"><pre><code class=\"language-c--\" data-lang=\"c++\">x</code></pre></div>"
/// );
/// ```
#[must_use]
pub fn add_code_tag(html: &str, lang: &str) -> String {
    let open = format!(
        r#"<pre><code class="language-{}" data-lang="{lang}">"#,
        lang.replace('+', "-")
    );
    let html = PRE_OPEN_RE.replace(html, NoExpand(&open));
    let html = PRE_CLOSE_RE.replace(&html, "</code></pre>");
    sombra_tags::strip(&html).to_owned()
}
