//! Site configuration for Sombra.
//!
//! Parses `sombra.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! ```toml
//! [highlight]
//! backend = "syntect"
//! prefix = "<figure>"
//! suffix = "</figure>"
//! ```
//!
//! The backend identifier is a closed set (see [`HighlighterKind`]). Unknown
//! identifiers are rejected when the file is parsed, so a misconfigured site
//! fails before any page is rendered.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sombra.toml";

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Syntax highlighting configuration.
    pub highlight: HighlightConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Syntax highlighting configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Active highlighting backend.
    pub backend: HighlighterKind,
    /// Default `highlighter_prefix` emitted before every highlighted block.
    pub prefix: Option<String>,
    /// Default `highlighter_suffix` emitted after every highlighted block.
    pub suffix: Option<String>,
}

/// Supported highlighting backends.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HighlighterKind {
    /// Class-based highlighting with syntect.
    ///
    /// `rouge` is accepted as an alias so existing site configs keep working.
    #[default]
    #[serde(alias = "rouge")]
    Syntect,
    /// HTML-escaped code without token markup.
    Plain,
    /// No highlighted output at all.
    None,
}

impl HighlighterKind {
    /// Identifier as written in `sombra.toml`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Syntect => "syntect",
            Self::Plain => "plain",
            Self::None => "none",
        }
    }
}

impl fmt::Display for HighlighterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error (includes unknown highlighter backends).
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sombra.toml` in current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        let discovered = std::env::current_dir()
            .ok()
            .and_then(|cwd| Self::discover_config(&cwd));

        match discovered {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` on malformed TOML or an unknown backend.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Search for config file in `start` and its parents.
    fn discover_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            backend = %config.highlight.backend,
            "Loaded site configuration"
        );

        Ok(config)
    }
}
