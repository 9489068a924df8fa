use pretty_assertions::assert_eq;
use sombra_config::Config;
use sombra_example::register;
use sombra_tags::{HIGHLIGHTER_PREFIX, RenderContext, TagError, TemplateEngine};

fn engine() -> TemplateEngine {
    register(TemplateEngine::new())
}

fn load_config(toml: &str) -> (tempfile::TempDir, Config) {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("sombra.toml");
    std::fs::write(&path, toml).unwrap();
    let config = Config::load(Some(&path)).unwrap();
    (temp_dir, config)
}

#[test]
fn test_page_with_example_blocks() {
    let (_dir, config) = load_config("[highlight]\nbackend = \"plain\"\n");
    let source = "<h1>{{ title }}</h1>\n{% example HTML %}\n<p>hi</p>\n{% endexample %}\n";

    let template = engine().compile(source).unwrap();
    let ctx = RenderContext::new(&config).with_var("title", "Buttons");

    assert_eq!(
        template.render(&ctx),
        concat!(
            "<h1>Buttons</h1>\n",
            "<div class=\"sombra-example\">\n<p>hi</p>\n</div>",
            "<div class=\"highlight\"><pre><code class=\"language-html\" data-lang=\"html\">",
            "&lt;p&gt;hi&lt;/p&gt;</code></pre></div>\n"
        )
    );
}

#[test]
fn test_affixes_from_config() {
    let (_dir, config) = load_config(
        "[highlight]\nbackend = \"none\"\nprefix = \"<figure>\"\nsuffix = \"</figure>\"\n",
    );
    let template = engine()
        .compile("{% example js %}alert(1){% endexample %}")
        .unwrap();

    assert_eq!(
        template.render(&RenderContext::new(&config)),
        "<figure><div class=\"sombra-example\">\nalert(1)\n</div></figure>"
    );
}

#[test]
fn test_page_prefix_overrides_config() {
    let (_dir, config) = load_config("[highlight]\nbackend = \"none\"\nprefix = \"<figure>\"\n");
    let template = engine()
        .compile("{% example js %}x{% endexample %}")
        .unwrap();
    let ctx = RenderContext::new(&config).with_var(HIGHLIGHTER_PREFIX, "<aside>");

    assert!(template.render(&ctx).starts_with("<aside><div"));
}

#[test]
fn test_syntect_highlights_each_language() {
    let (_dir, config) = load_config("[highlight]\nbackend = \"rouge\"\n");
    let ctx = RenderContext::new(&config);

    for (lang, code) in [
        ("html", "<a href=\"#\">x</a>"),
        ("css", ".btn { color: red; }"),
        ("js", "const a = [1, 2];"),
    ] {
        let source = format!("{{% example {lang} %}}{code}{{% endexample %}}");
        let html = engine().compile(&source).unwrap().render(&ctx);

        assert!(html.starts_with(&format!("<div class=\"sombra-example\">\n{code}\n</div>")));
        assert!(html.contains(&format!(
            r#"<pre><code class="language-{lang}" data-lang="{lang}">"#
        )));
        assert!(html.contains("<span class="), "{lang}: {html}");
    }
}

#[test]
fn test_invalid_selector_fails_at_compile_time() {
    let err = engine()
        .compile("intro\n{% example python %}\nprint(1)\n{% endexample %}")
        .err()
        .unwrap();

    assert!(matches!(err, TagError::Syntax { line: 2, .. }));
    assert_eq!(
        err.to_string(),
        "line 2: Invalid syntax: '{% example python  %}'. Expected: {% example <html|css|js> %}."
    );
}

#[test]
fn test_unicode_space_selector_fails_at_compile_time() {
    let err = engine()
        .compile("{% example html\u{a0}%}x{% endexample %}")
        .err()
        .unwrap();

    assert!(matches!(err, TagError::Syntax { line: 1, ref source } if source.markup == "html\u{a0}"));
}

#[test]
fn test_missing_selector_fails_at_compile_time() {
    let err = engine()
        .compile("{% example %}x{% endexample %}")
        .err()
        .unwrap();
    assert!(matches!(err, TagError::Syntax { line: 1, .. }));
}

#[test]
fn test_unclosed_example() {
    let err = engine().compile("{% example css %}a {}").err().unwrap();
    assert!(matches!(err, TagError::UnclosedBlock { ref name, line: 1 } if name == "example"));
}

#[test]
fn test_unknown_backend_fails_config_load() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("sombra.toml");
    std::fs::write(&path, "[highlight]\nbackend = \"pygments\"\n").unwrap();

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_concurrent_renders() {
    let config = Config::default();
    let template = engine()
        .compile("{% example css %}p { margin: 0; }{% endexample %}")
        .unwrap();
    let expected = template.render(&RenderContext::new(&config));

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| template.render(&RenderContext::new(&config))))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
