//! Persistence for the display preference.
//!
//! A single key-value pair: a `theme-preference` file containing the literal
//! string `"dark"` or `"light"`. Lives in the platform config directory, with
//! a local `data` directory as fallback when none exists.

use color_eyre::{eyre::WrapErr, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed storage key for the display preference.
pub const PREFERENCE_KEY: &str = "theme-preference";

/// Directory holding the preference file.
pub fn preference_dir() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("folio"))
        .unwrap_or_else(|| PathBuf::from("data"))
}

/// Load the stored preference value from the given directory.
///
/// Returns `None` when nothing has been stored yet or the file is unreadable;
/// the caller falls back to the default preference.
pub fn load_preference_from(dir: &Path) -> Option<String> {
    let raw = fs::read_to_string(dir.join(PREFERENCE_KEY)).ok()?;
    let value = raw.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Save a preference value into the given directory, creating it if needed.
pub fn save_preference_to(dir: &Path, value: &str) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("Failed to create preference directory {:?}", dir))?;
    }
    let file_path = dir.join(PREFERENCE_KEY);
    fs::write(&file_path, value)
        .wrap_err_with(|| format!("Failed to write preference to {:?}", file_path))
}

/// Load the stored preference from the default location.
pub fn load_preference() -> Option<String> {
    load_preference_from(&preference_dir())
}

/// Save the preference to the default location.
pub fn save_preference(value: &str) -> Result<()> {
    save_preference_to(&preference_dir(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_preference_from(dir.path()), None);
    }

    #[test]
    fn round_trip() {
        let dir = tempfile::tempdir().unwrap();
        save_preference_to(dir.path(), "dark").unwrap();
        assert_eq!(load_preference_from(dir.path()), Some("dark".to_string()));
        save_preference_to(dir.path(), "light").unwrap();
        assert_eq!(load_preference_from(dir.path()), Some("light".to_string()));
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCE_KEY), "dark\n").unwrap();
        assert_eq!(load_preference_from(dir.path()), Some("dark".to_string()));
    }

    #[test]
    fn blank_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCE_KEY), "  \n").unwrap();
        assert_eq!(load_preference_from(dir.path()), None);
    }

    #[test]
    fn save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        save_preference_to(&nested, "dark").unwrap();
        assert_eq!(load_preference_from(&nested), Some("dark".to_string()));
    }
}
