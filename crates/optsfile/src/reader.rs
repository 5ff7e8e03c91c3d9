//! File-backed reader for `.of` files.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::builder::TreeBuilder;
use crate::config::TokenizerConfig;
use crate::error::ParseError;
use crate::options::Options;
use crate::tokenizer::{Record, Tokenizer};

/// Reads one `.of` file and converts it into [`Options`].
///
/// The path is resolved and checked when the reader is created, so a missing
/// file is reported before any parsing starts.
#[derive(Debug, Clone)]
pub struct Reader {
    path: PathBuf,
    tokenizer: Tokenizer,
}

impl Reader {
    /// Create a reader with the default tokenizer settings.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        Self::with_config(path, &TokenizerConfig::default())
    }

    /// Create a reader with custom tokenizer settings.
    pub fn with_config(
        path: impl AsRef<Path>,
        config: &TokenizerConfig,
    ) -> Result<Self, ParseError> {
        let path = std::path::absolute(path.as_ref()).map_err(|_| ParseError::Existence {
            path: path.as_ref().to_path_buf(),
        })?;
        if !path.is_file() {
            return Err(ParseError::Existence { path });
        }
        Ok(Self {
            path,
            tokenizer: Tokenizer::new(config),
        })
    }

    /// The absolute path this reader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file and return its tokenized lines without building a tree.
    pub fn read_records(&self) -> Result<Vec<Record>, ParseError> {
        let text = std::fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), bytes = text.len(), "read options file");
        self.tokenizer.tokenize_str(&text)
    }

    /// Read the file and collapse it into the nested options mapping.
    pub fn read(&self) -> Result<Options, ParseError> {
        let records = self.read_records()?;
        let options = TreeBuilder::new().build(records)?.collapse_children();
        debug!(path = %self.path.display(), options = options.len(), "loaded options file");
        Ok(options)
    }
}
