//! Persisted key-value preferences.
//!
//! Settings toggled from the UI (sound on/off, theme) are kept apart from
//! `config.toml` in a flat TOML table of string values, so the user's
//! hand-edited configuration is never rewritten by a keystroke.

use anyhow::{bail, Context, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key holding `"true"` or `"false"`.
pub const SOUND_ENABLED_KEY: &str = "soundEnabled";

/// Key holding the theme identifier.
pub const THEME_KEY: &str = "theme";

/// String-keyed store that survives restarts.
pub trait PreferenceStore {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value and persist it immediately.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences stored in a TOML file.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be parsed is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read preferences {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse preferences {}", path.display()))?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(values)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write preferences {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    /// The value is kept only once the file holds it.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.clone();
        values.insert(key.to_string(), value.to_string());
        self.write(&values)?;
        self.values = values;
        Ok(())
    }
}

/// In-memory store.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the application persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with `pairs`.
    pub fn with_values<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.values.borrow_mut().extend(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    /// Make every subsequent `set` fail without storing anything.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.get() {
            bail!("preference store is read-only");
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trips_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("preferences.toml");

        let mut store = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").unwrap();
        store.set(SOUND_ENABLED_KEY, "true").unwrap();

        let reopened = FilePreferenceStore::open(&path).unwrap();
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(reopened.get(SOUND_ENABLED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_file_store_failed_write_keeps_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the data directory should be
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "").unwrap();

        let mut store = FilePreferenceStore::open(blocker.join("preferences.toml")).unwrap();
        assert!(store.set(THEME_KEY, "dark").is_err());
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        std::fs::write(&path, "theme = [").unwrap();

        assert!(FilePreferenceStore::open(&path).is_err());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryPreferenceStore::new();
        let mut handle: Box<dyn PreferenceStore> = Box::new(store.clone());
        handle.set(THEME_KEY, "sepia").unwrap();

        assert_eq!(store.get(THEME_KEY).as_deref(), Some("sepia"));
    }

    #[test]
    fn test_memory_store_failing_writes() {
        let mut store = MemoryPreferenceStore::with_values([(THEME_KEY, "light")]);
        store.set_fail_writes(true);

        assert!(store.set(THEME_KEY, "dark").is_err());
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }
}
