//! The display preference store.
//!
//! Holds the light/dark mode, persists changes, and derives the presentation
//! values (palette, toggle icon) the rest of the UI reads. Persistence
//! failures are cosmetic and never surfaced; the in-memory mode still applies
//! for the session.

use std::path::PathBuf;

use crate::storage;
use crate::ui::theme::Palette;

/// The two-valued display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Literal stored value for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Unknown strings are rejected so a corrupt
    /// preference file falls back to the default.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Owns the current display preference for the session.
#[derive(Debug)]
pub struct ThemeStore {
    mode: ThemeMode,
    dir: PathBuf,
}

impl ThemeStore {
    /// Load the preference from the default storage location.
    pub fn load() -> Self {
        Self::load_from(storage::preference_dir())
    }

    /// Load the preference from a specific directory.
    pub fn load_from(dir: PathBuf) -> Self {
        let mode = storage::load_preference_from(&dir)
            .and_then(|value| ThemeMode::parse(&value))
            .unwrap_or_default();
        Self { mode, dir }
    }

    /// The active mode. No side effects.
    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist the new value.
    ///
    /// A failed write is logged and otherwise ignored; the preference is
    /// cosmetic and must never take the application down.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(err) = storage::save_preference_to(&self.dir, self.mode.as_str()) {
            tracing::warn!(error = %err, "failed to persist theme preference");
        }
        self.mode
    }

    /// Glyph for the toggle control: shows what pressing it switches to.
    pub fn icon(&self) -> &'static str {
        match self.mode {
            ThemeMode::Light => "\u{263e}", // moon
            ThemeMode::Dark => "\u{2600}",  // sun
        }
    }

    /// Color scheme derived from the active mode.
    pub fn palette(&self) -> Palette {
        match self.mode {
            ThemeMode::Light => Palette::light(),
            ThemeMode::Dark => Palette::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ThemeStore {
        ThemeStore::load_from(dir.path().to_path_buf())
    }

    #[test]
    fn fresh_session_defaults_to_light() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).current(), ThemeMode::Light);
    }

    #[test]
    fn toggle_twice_is_identity() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let before = store.current();
        store.toggle();
        store.toggle();
        assert_eq!(store.current(), before);
    }

    #[test]
    fn toggle_persists_the_negated_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(
            crate::storage::load_preference_from(dir.path()),
            Some("dark".to_string())
        );

        // Simulated restart picks up the stored value.
        let restarted = store_in(&dir);
        assert_eq!(restarted.current(), ThemeMode::Dark);
    }

    #[test]
    fn corrupt_stored_value_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        crate::storage::save_preference_to(dir.path(), "solarized").unwrap();
        assert_eq!(store_in(&dir).current(), ThemeMode::Light);
    }

    #[test]
    fn icon_tracks_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);
        let light_icon = store.icon();
        store.toggle();
        assert_ne!(store.icon(), light_icon);
    }

    #[test]
    fn unwritable_storage_keeps_in_memory_mode() {
        // A file where the directory should be makes every write fail.
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        std::fs::write(&blocked, b"occupied").unwrap();
        let mut store = ThemeStore::load_from(blocked);
        assert_eq!(store.toggle(), ThemeMode::Dark);
        assert_eq!(store.current(), ThemeMode::Dark);
    }
}
