//! On-disk `.of` fixtures.
//!
//! [`OptsFixture`] owns a temporary directory and writes option files into
//! it, so tests can exercise the file-backed entry points without touching
//! the working tree.

use std::path::{Path, PathBuf};

use optsfile::AppConfig;
use tempfile::TempDir;

/// Two top-level subcategories, tab indented, with a blank separator line.
pub const CAR_AND_BIKE: &str = "Car:\n\tMake: Honda\n\tModel: Accord\n\nBike:\n\tType: Mountain\n";

/// The same document as [`CAR_AND_BIKE`], indented with four spaces.
pub const CAR_AND_BIKE_SPACES: &str =
    "Car:\n    Make: Honda\n    Model: Accord\n\nBike:\n    Type: Mountain\n";

/// Three levels of nesting.
pub const NESTED: &str = "Blah:\n\tFoo:\n\t\tBar: baz\n";

/// A value nested two levels below its only ancestor.
pub const DEPTH_JUMP: &str = "Blah:\n\t\tBar: baz\n";

/// A subcategory line missing its colon.
pub const MISSING_COLON: &str = "Blah\n\tBar: baz\n";

/// A line indented with a single space.
pub const SINGLE_SPACE: &str = "Blah:\n Bar: baz\n";

/// A test-scoped directory of `.of` files.
///
/// The temp directory is deleted automatically when this value is dropped,
/// guaranteeing cleanup even on panic.
pub struct OptsFixture {
    temp_dir: TempDir,
}

impl OptsFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Create a fixture holding a single file named `options.of`.
    pub fn with_file(content: &str) -> (Self, PathBuf) {
        let fixture = Self::new();
        let path = fixture.write("options.of", content);
        (fixture, path)
    }

    /// Write (or overwrite) `name` inside the fixture directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Write `config` as `optsfile.toml` inside the fixture directory.
    pub fn write_config(&self, config: &AppConfig) -> PathBuf {
        let toml = toml::to_string(config).expect("AppConfig always serializes");
        self.write("optsfile.toml", &toml)
    }

    /// A path inside the fixture directory that does not exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for OptsFixture {
    fn default() -> Self {
        Self::new()
    }
}
