//! Error types for `.of` parsing and configuration loading.

use std::path::PathBuf;

/// Errors raised while turning a `.of` file into an [`Options`](crate::Options) map.
///
/// Every variant is fatal for the current parse call: no partial results are
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The target path does not resolve to an existing file.
    #[error("{} does not exist", path.display())]
    Existence { path: PathBuf },

    /// Indentation could not be classified, or a line is missing a required colon.
    #[error("line {line}: malformed line: {reason}")]
    Format { line: usize, reason: String },

    /// A line is indented more than one level below its nearest open ancestor.
    #[error(
        "line {line}: unexpected indentation jump to depth {depth} (deepest allowed is {max_depth})"
    )]
    Structure {
        line: usize,
        depth: usize,
        max_depth: usize,
    },

    /// A line split into more than two tokens.
    #[error("line {line}: malformed line: too many tokens ({count})")]
    Token { line: usize, count: usize },

    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }

    /// The 1-based source line the error points at, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } | Self::Structure { line, .. } | Self::Token { line, .. } => {
                Some(*line)
            }
            Self::Existence { .. } | Self::Io(_) => None,
        }
    }
}

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}
