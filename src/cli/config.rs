//! TOML configuration file support
//!
//! Settings that would otherwise be repeated on every invocation can live in
//! a config file. Command-line flags take precedence.
//!
//! ```toml
//! # msl.toml
//! [output]
//! format = "json"
//! pretty = true
//!
//! [parse]
//! parallel = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration structure for msl.toml files
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Parse settings
    #[serde(default)]
    pub parse: ParseConfig,
}

/// How parsed records are printed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per record
    #[default]
    Text,
    /// JSON array of records
    Json,
}

/// Configuration for record output
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// Output format
    pub format: Option<OutputFormat>,

    /// Pretty-print output
    pub pretty: Option<bool>,
}

/// Configuration for parsing
#[derive(Debug, Default, Deserialize)]
pub struct ParseConfig {
    /// Decode records in parallel
    pub parallel: Option<bool>,
}

/// Effective settings after merging flags over the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub pretty: bool,
    pub parallel: bool,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Merge command-line flags over this configuration
    ///
    /// Boolean flags can only switch a setting on.
    pub fn resolve(&self, format: Option<OutputFormat>, pretty: bool, parallel: bool) -> Settings {
        Settings {
            format: format.or(self.output.format).unwrap_or_default(),
            pretty: pretty || self.output.pretty.unwrap_or(false),
            parallel: parallel || self.parse.parallel.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [output]
            format = "json"
            pretty = true

            [parse]
            parallel = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.parse.parallel, Some(true));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [output]
            pretty = true
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.output.format, None);
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.parse.parallel, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.output.format, None);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Config::from_str("[output]\nformat = \"xml\"").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config::from_str("[output]\nformat = \"json\"").unwrap();

        let settings = config.resolve(None, false, false);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.pretty);

        let settings = config.resolve(Some(OutputFormat::Text), true, false);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(settings.pretty);
    }
}
