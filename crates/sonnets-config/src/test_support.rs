//! Test helpers shared across sonnets-config unit tests.
//!
//! Kept behind `cfg(test)` to avoid leaking into the public API surface.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use toml::Table;

use crate::discovery::CONFIG_FILENAME;

/// A settings store inside a temporary directory.
pub struct TestStore {
    /// Directory holding the store.
    root: TempDir,
}

impl TestStore {
    /// Creates an empty temporary directory with no store written yet.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Creates a store with the given raw contents.
    pub fn with_content(content: &str) -> Self {
        let store = Self::new();
        fs::write(store.path(), content).unwrap();
        store
    }

    /// Returns the temporary directory.
    pub fn dir(&self) -> &Path {
        self.root.path()
    }

    /// Returns the store path.
    pub fn path(&self) -> PathBuf {
        self.root.path().join(CONFIG_FILENAME)
    }

    /// Parses the store as a raw TOML table.
    pub fn read_table(&self) -> Table {
        toml::from_str(&fs::read_to_string(self.path()).unwrap()).unwrap()
    }
}
