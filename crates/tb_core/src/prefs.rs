//! User preferences
//!
//! The browser build kept the last team search in ambient local storage;
//! here that becomes injected state behind an explicit load/save store so
//! callers decide where (and whether) it persists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience state remembered between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchPrefs {
    /// Team name of the last puzzle search, pre-filled on the next visit.
    #[serde(default)]
    pub last_team_search: Option<String>,
}

impl SearchPrefs {
    pub fn remember_search(&mut self, team_name: impl Into<String>) {
        self.last_team_search = Some(team_name.into());
    }
}

/// Load/save hooks for preferences. Callers inject an implementation;
/// the core never reaches for ambient storage itself.
pub trait PrefsStore {
    fn load(&self) -> Result<SearchPrefs, PrefsError>;
    fn save(&self, prefs: &SearchPrefs) -> Result<(), PrefsError>;
}

/// JSON-file-backed store.
#[derive(Debug, Clone)]
pub struct FilePrefsStore {
    path: PathBuf,
}

impl FilePrefsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefsStore for FilePrefsStore {
    /// Missing file means fresh defaults, not an error.
    fn load(&self) -> Result<SearchPrefs, PrefsError> {
        if !self.path.exists() {
            log::debug!("No prefs file at {:?}, using defaults", self.path);
            return Ok(SearchPrefs::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let prefs = serde_json::from_str(&data)?;
        log::debug!("Loaded prefs from {:?}", self.path);
        Ok(prefs)
    }

    fn save(&self, prefs: &SearchPrefs) -> Result<(), PrefsError> {
        let data = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, data)?;
        log::debug!("Saved prefs to {:?}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePrefsStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load().unwrap(), SearchPrefs::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePrefsStore::new(dir.path().join("prefs.json"));

        let mut prefs = SearchPrefs::default();
        prefs.remember_search("U10 Tigers");
        store.save(&prefs).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.last_team_search.as_deref(), Some("U10 Tigers"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FilePrefsStore::new(path);
        assert!(matches!(store.load(), Err(PrefsError::Serialization(_))));
    }
}
