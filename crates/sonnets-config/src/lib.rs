//! Persistent search settings for sonnets.
//!
//! Settings live in a small TOML store (`~/.sonnets.toml` by default). Loading
//! never fails: missing keys, wrong types and unreadable files all fall back to
//! defaults. Saving merges the recognized keys into whatever else the store
//! already holds.

#![warn(missing_docs)]

mod discovery;
mod error;
mod store;
#[cfg(test)]
mod test_support;

use std::{fmt, str::FromStr};

pub use discovery::{CONFIG_FILENAME, global_config_path, resolve_config_path};
pub use error::ConfigError;
use serde::{Deserialize, Serialize};
pub use store::{load_config, save_config};

/// How the words of a multi-word query are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum SearchMode {
    /// Every word must match a document in its own pass.
    #[default]
    #[serde(rename = "AND")]
    And,
    /// Any word may match.
    #[serde(rename = "OR")]
    Or,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
        }
    }
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if s.eq_ignore_ascii_case("or") {
            Ok(Self::Or)
        } else {
            Err(ConfigError::InvalidSearchMode {
                value: s.to_string(),
            })
        }
    }
}

/// User-adjustable search settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Whether matches are highlighted in output.
    pub highlight: bool,
    /// Combination mode for multi-word queries.
    pub search_mode: SearchMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            search_mode: SearchMode::And,
        }
    }
}

impl SearchConfig {
    /// Serializes the effective settings to TOML format.
    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).expect("settings serialization should not fail")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert!(config.highlight);
        assert_eq!(config.search_mode, SearchMode::And);
    }

    #[test]
    fn test_search_mode_parse() {
        assert_eq!("AND".parse::<SearchMode>().unwrap(), SearchMode::And);
        assert_eq!("Or".parse::<SearchMode>().unwrap(), SearchMode::Or);
        let err = "NOT".parse::<SearchMode>().unwrap_err();
        assert!(err.to_string().contains("NOT"));
    }

    #[test]
    fn test_search_mode_display() {
        assert_eq!(SearchMode::And.to_string(), "AND");
        assert_eq!(SearchMode::Or.to_string(), "OR");
    }

    #[test]
    fn test_to_toml() {
        let config = SearchConfig {
            highlight: false,
            search_mode: SearchMode::Or,
        };
        let toml = config.to_toml();
        assert!(toml.contains("highlight = false"));
        assert!(toml.contains("search_mode = \"OR\""));

        let parsed: SearchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, config);
    }
}
