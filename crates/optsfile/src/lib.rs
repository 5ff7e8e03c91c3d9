#![deny(unsafe_code)]

//! Reader for OptsFile (`.of`), a tab-indented hierarchical options format.
//!
//! ```text
//! Car:
//!     Make: Honda
//!     Model: Accord
//!
//! Bike:
//!     Type: Mountain
//! ```
//!
//! Parsing runs in three stages:
//!
//! 1. [`Tokenizer`] turns each non-blank line into a [`Record`] (depth + tokens).
//! 2. [`TreeBuilder`] nests the records into a [`Node`] tree under a `"*"` root.
//! 3. [`Node::collapse`] folds the tree depth first into nested [`Options`].
//!
//! [`parse`] runs all three against a file; [`parse_str`] against text in memory.

/// Depth-ordered records → option tree.
pub mod builder;
/// Tokenizer and tool configuration loaded from TOML.
pub mod config;
/// Parse and configuration errors.
pub mod error;
/// Option tree nodes and collapse.
pub mod node;
/// The nested options mapping.
pub mod options;
/// File-backed reader.
pub mod reader;
/// Line tokenizer.
pub mod tokenizer;

use std::path::Path;

pub use builder::TreeBuilder;
pub use config::{AppConfig, LoggingConfig, TokenizerConfig};
pub use error::{ConfigError, ParseError};
pub use node::{Node, ROOT_NAME};
pub use options::{OptionValue, Options};
pub use reader::Reader;
pub use tokenizer::{Record, Tokenizer};

/// Parse the `.of` file at `path` with default settings.
///
/// Fails with [`ParseError::Existence`] before reading anything if the path is
/// not an existing file.
pub fn parse(path: impl AsRef<Path>) -> Result<Options, ParseError> {
    Reader::new(path)?.read()
}

/// Parse the `.of` file at `path` with custom tokenizer settings.
pub fn parse_with(
    path: impl AsRef<Path>,
    config: &TokenizerConfig,
) -> Result<Options, ParseError> {
    Reader::with_config(path, config)?.read()
}

/// Parse `.of` text held in memory with default settings.
pub fn parse_str(text: &str) -> Result<Options, ParseError> {
    parse_lines(text.lines(), &TokenizerConfig::default())
}

/// Parse an ordered sequence of raw lines.
pub fn parse_lines<I, S>(lines: I, config: &TokenizerConfig) -> Result<Options, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = Tokenizer::new(config).tokenize(lines)?;
    Ok(TreeBuilder::new().build(records)?.collapse_children())
}
