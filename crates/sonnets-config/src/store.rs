//! Reading and writing the settings store.
//!
//! The store is a flat TOML table. Only `highlight` and `search_mode` are
//! interpreted; any other keys are left untouched when settings are saved.

use std::{fs, path::Path};

use toml::{Table, Value};
use tracing::{debug, warn};

use crate::{ConfigError, SearchConfig};

/// Store key for the highlight flag.
const HIGHLIGHT_KEY: &str = "highlight";
/// Store key for the search mode.
const SEARCH_MODE_KEY: &str = "search_mode";

/// Loads settings from the store at `path`.
///
/// Never fails: a missing store yields defaults, an unreadable or malformed
/// store yields defaults with a warning, and each recognized key falls back to
/// its default when absent or of the wrong type.
pub fn load_config(path: &Path) -> SearchConfig {
    match read_store(path) {
        Ok(Some(table)) => config_from_table(&table),
        Ok(None) => {
            debug!(path = %path.display(), "no settings store, using defaults");
            SearchConfig::default()
        }
        Err(e) => {
            warn!("{e}; using default settings");
            SearchConfig::default()
        }
    }
}

/// Writes settings to the store at `path`.
///
/// Existing keys other than the recognized ones are preserved. An unreadable
/// existing store is replaced.
pub fn save_config(path: &Path, config: &SearchConfig) -> Result<(), ConfigError> {
    let mut table = match read_store(path) {
        Ok(table) => table.unwrap_or_default(),
        Err(e) => {
            warn!("{e}; overwriting settings store");
            Table::new()
        }
    };

    table.insert(HIGHLIGHT_KEY.into(), Value::Boolean(config.highlight));
    table.insert(
        SEARCH_MODE_KEY.into(),
        Value::String(config.search_mode.to_string()),
    );

    let contents =
        toml::to_string_pretty(&table).map_err(|source| ConfigError::Serialize { source })?;
    fs::write(path, contents).map_err(|source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "saved settings");
    Ok(())
}

/// Reads the store as a generic table. Returns `Ok(None)` if it does not exist.
fn read_store(path: &Path) -> Result<Option<Table>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Builds settings from a parsed store, filling defaults per key.
fn config_from_table(table: &Table) -> SearchConfig {
    let mut config = SearchConfig::default();

    match table.get(HIGHLIGHT_KEY) {
        Some(Value::Boolean(highlight)) => config.highlight = *highlight,
        Some(other) => warn!("ignoring non-boolean {HIGHLIGHT_KEY} = {other}"),
        None => {}
    }

    match table.get(SEARCH_MODE_KEY) {
        Some(Value::String(mode)) => match mode.parse() {
            Ok(mode) => config.search_mode = mode,
            Err(e) => warn!("ignoring {SEARCH_MODE_KEY}: {e}"),
        },
        Some(other) => warn!("ignoring non-string {SEARCH_MODE_KEY} = {other}"),
        None => {}
    }

    config
}
