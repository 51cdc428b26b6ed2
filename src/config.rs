//! Configuration file support
//!
//! Settings are read from TOML. Every field is optional; command-line flags
//! take precedence over anything loaded here.
//!
//! ```toml
//! templates_dir = "templates"
//!
//! [defaults]
//! name = "Jane Doe"
//! year = "2024"
//!
//! [output]
//! color = false
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Directory searched for templates when nothing else is configured
pub const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Errors that can occur when loading or parsing configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `*.template` files
    pub templates_dir: PathBuf,
    /// Name used when none is given on the command line
    pub default_name: Option<String>,
    /// Year used when none is given on the command line
    pub default_year: Option<String>,
    /// Colorize terminal output
    pub color: bool,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    templates_dir: Option<PathBuf>,
    defaults: Option<TomlDefaults>,
    output: Option<TomlOutput>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    name: Option<String>,
    year: Option<toml::Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOutput {
    color: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            default_name: None,
            default_year: None,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let defaults = Self::default();

        let (default_name, default_year) = match parsed.defaults {
            Some(d) => (d.name, d.year.map(year_string)),
            None => (None, None),
        };

        Ok(Config {
            templates_dir: parsed.templates_dir.unwrap_or(defaults.templates_dir),
            default_name,
            default_year,
            color: parsed
                .output
                .and_then(|o| o.color)
                .unwrap_or(defaults.color),
        })
    }

    /// Set the templates directory
    pub fn with_templates_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.templates_dir = dir.into();
        self
    }

    /// Enable or disable color output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Accept `year = 2024` as well as `year = "2024"`
fn year_string(value: toml::Value) -> String {
    match value {
        toml::Value::String(s) => s,
        other => other.to_string(),
    }
}
