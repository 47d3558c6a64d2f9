//! Settings store location.

use std::path::PathBuf;

use directories::BaseDirs;

/// The settings store filename.
pub const CONFIG_FILENAME: &str = ".sonnets.toml";

/// Returns the path to the global settings store (`~/.sonnets.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Resolves the settings store path, preferring an explicit override.
///
/// Falls back to `CONFIG_FILENAME` in the working directory when neither an
/// override nor a home directory is available.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(global_config_path)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
}
