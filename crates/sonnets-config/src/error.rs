//! Error types for sonnets configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::{de, ser};

/// Errors that can occur when reading or writing the settings store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings store.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to serialize settings to TOML.
    #[error("failed to serialize settings: {source}")]
    Serialize {
        /// Underlying TOML serialization error.
        source: ser::Error,
    },

    /// Failed to write the settings store.
    #[error("failed to write config file {path}: {source}")]
    WriteFile {
        /// Path to the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A search mode other than `AND` or `OR`.
    #[error("invalid search mode '{value}' (expected AND or OR)")]
    InvalidSearchMode {
        /// The rejected value.
        value: String,
    },
}
