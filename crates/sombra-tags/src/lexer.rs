//! Template tokenizer.
//!
//! Splits a template into text, `{% name markup %}` tags and `{{ expr }}` outputs.

use crate::{TagError, is_strip_char, strip};

const TAG_START: &str = "{%";
const TAG_END: &str = "%}";
const OUTPUT_START: &str = "{{";
const OUTPUT_END: &str = "}}";

/// A lexical token borrowed from the template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// Literal text between delimiters.
    Text(&'a str),
    /// Tag: `{% name markup %}`
    Tag {
        name: &'a str,
        markup: &'a str,
        line: usize,
    },
    /// Variable output: `{{ expr }}`
    Output { expr: &'a str, line: usize },
}

/// Tokenize a template.
///
/// Line numbers are 1-indexed and refer to the opening delimiter.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token<'_>>, TagError> {
    let mut tokens = Vec::new();
    let mut remaining = source;
    let mut line = 1;

    while !remaining.is_empty() {
        let Some((start, is_tag)) = next_delimiter(remaining) else {
            tokens.push(Token::Text(remaining));
            break;
        };

        if start > 0 {
            let text = &remaining[..start];
            line += count_lines(text);
            tokens.push(Token::Text(text));
        }

        let (open, close) = if is_tag {
            (TAG_START, TAG_END)
        } else {
            (OUTPUT_START, OUTPUT_END)
        };

        let after_open = &remaining[start + open.len()..];
        let end = after_open.find(close).ok_or(TagError::Unterminated {
            delimiter: open,
            line,
        })?;
        let inner = &after_open[..end];

        let token = if is_tag {
            let (name, markup) = split_tag(inner);
            if name.is_empty() {
                return Err(TagError::MissingName { line });
            }
            Token::Tag { name, markup, line }
        } else {
            Token::Output {
                expr: strip(inner),
                line,
            }
        };
        tokens.push(token);

        line += count_lines(inner);
        remaining = &after_open[end + close.len()..];
    }

    Ok(tokens)
}

/// Find the first `{%` or `{{`, returning its offset and whether it opens a tag.
fn next_delimiter(s: &str) -> Option<(usize, bool)> {
    match (s.find(TAG_START), s.find(OUTPUT_START)) {
        (Some(tag), Some(output)) => Some(if tag < output {
            (tag, true)
        } else {
            (output, false)
        }),
        (Some(tag), None) => Some((tag, true)),
        (None, Some(output)) => Some((output, false)),
        (None, None) => None,
    }
}

/// Split tag contents into name and markup.
///
/// The name ends at the first whitespace. The markup is the rest with leading
/// whitespace removed; trailing whitespace is kept so tags see it verbatim.
fn split_tag(inner: &str) -> (&str, &str) {
    let inner = inner.trim_start_matches(is_strip_char);
    match inner.find(is_strip_char) {
        Some(idx) => (&inner[..idx], inner[idx..].trim_start_matches(is_strip_char)),
        None => (inner, ""),
    }
}

fn count_lines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_text_only() {
        let tokens = tokenize("plain text").unwrap();
        assert_eq!(tokens, vec![Token::Text("plain text")]);
    }

    #[test]
    fn test_empty_source() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_block_tag() {
        let tokens = tokenize("{% example html %}<p>hi</p>{% endexample %}").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Tag {
                    name: "example",
                    markup: "html ",
                    line: 1
                },
                Token::Text("<p>hi</p>"),
                Token::Tag {
                    name: "endexample",
                    markup: "",
                    line: 1
                },
            ]
        );
    }

    #[test]
    fn test_markup_keeps_trailing_whitespace() {
        let tokens = tokenize("{%   example   CSS   %}").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Tag {
                name: "example",
                markup: "CSS   ",
                line: 1
            }]
        );
    }

    #[test]
    fn test_unicode_space_is_part_of_markup() {
        let tokens = tokenize("{% example html\u{a0}%}").unwrap();
        assert_eq!(
            tokens,
            vec![Token::Tag {
                name: "example",
                markup: "html\u{a0}",
                line: 1
            }]
        );
    }

    #[test]
    fn test_unicode_space_does_not_end_name() {
        let tokens = tokenize("{% a\u{a0}b c %}").unwrap();
        assert!(matches!(tokens[0], Token::Tag { name: "a\u{a0}b", markup: "c ", .. }));
    }

    #[test]
    fn test_output() {
        let tokens = tokenize("Hello {{ name }}!").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Text("Hello "),
                Token::Output {
                    expr: "name",
                    line: 1
                },
                Token::Text("!"),
            ]
        );
    }

    #[test]
    fn test_output_before_tag() {
        let tokens = tokenize("{{ a }}{% b %}").unwrap();
        assert!(matches!(tokens[0], Token::Output { expr: "a", .. }));
        assert!(matches!(tokens[1], Token::Tag { name: "b", .. }));
    }

    #[test]
    fn test_line_numbers() {
        let source = "line one\n{% example js %}\nvar a;\n{% endexample %}";
        let tokens = tokenize(source).unwrap();

        let lines: Vec<usize> = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Tag { line, .. } => Some(*line),
                _ => None,
            })
            .collect();
        assert_eq!(lines, vec![2, 4]);
    }

    #[test]
    fn test_line_numbers_after_multiline_tag() {
        let source = "{% example\nhtml %}\n{{ x }}";
        let tokens = tokenize(source).unwrap();
        assert!(matches!(tokens.last(), Some(Token::Output { line: 3, .. })));
    }

    #[test]
    fn test_unterminated_tag() {
        let err = tokenize("text\n{% example html").unwrap_err();
        assert_eq!(
            err,
            TagError::Unterminated {
                delimiter: "{%",
                line: 2
            }
        );
    }

    #[test]
    fn test_unterminated_output() {
        let err = tokenize("{{ name").unwrap_err();
        assert_eq!(
            err,
            TagError::Unterminated {
                delimiter: "{{",
                line: 1
            }
        );
    }

    #[test]
    fn test_missing_name() {
        let err = tokenize("{%   %}").unwrap_err();
        assert_eq!(err, TagError::MissingName { line: 1 });
    }

    #[test]
    fn test_lone_braces_are_text() {
        let tokens = tokenize("a { b } c %} d").unwrap();
        assert_eq!(tokens, vec![Token::Text("a { b } c %} d")]);
    }
}
