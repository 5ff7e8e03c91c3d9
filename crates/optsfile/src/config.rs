//! Tool configuration loaded from TOML.
//!
//! The `.of` format itself has no settings; this covers how the tokenizer
//! classifies indentation and how verbose the command-line tool is.
//!
//! ## TOML Example
//!
//! ```toml
//! [tokenizer]
//! indent_width = 2
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tokenizer settings.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for [`Tokenizer`](crate::Tokenizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Number of consecutive spaces that make up one indentation unit when a
    /// line is indented with spaces instead of tabs.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            indent_width: default_indent_width(),
        }
    }
}

fn default_indent_width() -> usize {
    4
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const MAX_INDENT_WIDTH: usize = 16;

impl AppConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tokenizer.validate()?;

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got {:?}",
                valid_levels, self.logging.level
            )));
        }

        Ok(())
    }
}

impl TokenizerConfig {
    /// Use `width` spaces as one indentation unit.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Validate the tokenizer settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_width == 0 || self.indent_width > MAX_INDENT_WIDTH {
            return Err(ConfigError::Validation(format!(
                "tokenizer.indent_width must be in 1..={MAX_INDENT_WIDTH}, got {}",
                self.indent_width
            )));
        }
        Ok(())
    }
}
