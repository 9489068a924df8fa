//! Language selector.

use std::fmt;
use std::str::FromStr;

use sombra_tags::SyntaxError;

use crate::TAG_NAME;

/// Language of an example block's body.
///
/// Parsed case-insensitively, ignoring surrounding ASCII whitespace and NUL:
///
/// ```
/// use sombra_example::LanguageSelector;
///
/// assert_eq!(" CSS ".parse::<LanguageSelector>().unwrap(), LanguageSelector::Css);
/// assert!("python".parse::<LanguageSelector>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LanguageSelector {
    /// HTML markup.
    Html,
    /// CSS stylesheet.
    Css,
    /// JavaScript.
    Js,
}

impl LanguageSelector {
    /// All selectors, in grammar order.
    pub const ALL: [Self; 3] = [Self::Html, Self::Css, Self::Js];

    /// Selector keyword.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Css => "css",
            Self::Js => "js",
        }
    }

    /// Accepted tag grammar, e.g. `example <html|css|js>`.
    #[must_use]
    pub fn grammar() -> String {
        let choices: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
        format!("{TAG_NAME} <{}>", choices.join("|"))
    }
}

impl fmt::Display for LanguageSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageSelector {
    type Err = SyntaxError;

    fn from_str(markup: &str) -> Result<Self, Self::Err> {
        let candidate = sombra_tags::strip(markup).to_lowercase();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == candidate)
            .ok_or_else(|| SyntaxError::new(TAG_NAME, markup, Self::grammar()))
    }
}
