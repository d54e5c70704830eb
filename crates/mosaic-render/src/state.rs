//! Persisted page state.
//!
//! The active language is the only value that outlives a single page load.
//! It is stored under the key `"lang"`: read once when composition starts,
//! written whenever the language is switched. [`AppState`] makes the state
//! an explicit object handed to the composer instead of ambient storage.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::lang::Language;
use crate::node::Node;

/// Storage key for the active language.
pub const LANG_KEY: &str = "lang";

/// Errors from reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to read state file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write state file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed state file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Named string values that persist across page loads.
pub trait StateStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError>;
}

/// In-memory store for tests and single-shot builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a small JSON map on disk.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStore {
    /// Open the store, loading existing values. A missing file is an empty
    /// store; a malformed file is an error so corruption is not silently
    /// overwritten.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StateError> {
        let path = path.into();
        let values = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StateError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&content).map_err(|source| StateError::Parse {
                path: path.clone(),
                source,
            })?
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StateError> {
        let content = serde_json::to_string_pretty(&self.values).expect("string map is valid JSON");
        fs::write(&self.path, content).map_err(|source| StateError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StateError> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

/// Application state handed to the composer at construction.
///
/// Owns the persisted language: loaded once at startup (unknown or missing
/// values fall back to English) and written through on every switch.
#[derive(Debug)]
pub struct AppState<S: StateStore> {
    store: S,
    lang: Language,
}

impl<S: StateStore> AppState<S> {
    /// Load the active language from the store, defaulting to English.
    pub fn load(store: S) -> Self {
        let lang = store
            .get(LANG_KEY)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self { store, lang }
    }

    /// State with an explicit language, persisted immediately.
    pub fn with_language(store: S, lang: Language) -> Result<Self, StateError> {
        let mut state = Self { store, lang };
        state.store.set(LANG_KEY, lang.code())?;
        Ok(state)
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// Switch the active language: persists the new value and updates the
    /// container's `lang`/`dir` attributes in the same step, so direction
    /// can never drift from the stored language.
    pub fn set_language(&mut self, lang: Language, container: &mut Node) -> Result<(), StateError> {
        self.store.set(LANG_KEY, lang.code())?;
        self.lang = lang;
        container.set_attr("lang", lang.code());
        container.set_attr("dir", lang.direction().as_str());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english_when_unset() {
        let state = AppState::load(MemoryStore::new());
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn defaults_to_english_on_unknown_code() {
        let mut store = MemoryStore::new();
        store.set(LANG_KEY, "zz").unwrap();
        let state = AppState::load(store);
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn set_language_persists_and_updates_direction() {
        let mut container = Node::new("div").id("preview");
        let mut state = AppState::load(MemoryStore::new());

        state.set_language(Language::Ar, &mut container).unwrap();
        assert_eq!(container.get_attr("dir"), Some("rtl"));
        assert_eq!(container.get_attr("lang"), Some("ar"));

        // Round trip back to English restores ltr exactly.
        state.set_language(Language::En, &mut container).unwrap();
        assert_eq!(container.get_attr("dir"), Some("ltr"));
        assert_eq!(container.get_attr("lang"), Some("en"));
        assert_eq!(state.language(), Language::En);
    }

    #[test]
    fn file_store_round_trips_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.set(LANG_KEY, "ar").unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get(LANG_KEY).as_deref(), Some("ar"));

        let state = AppState::load(reopened);
        assert_eq!(state.language(), Language::Ar);
    }
}
