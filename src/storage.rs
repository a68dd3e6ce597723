//! Durable key/value storage for client preferences.
//!
//! The site persists a single preference (the appearance mode). This module
//! provides the storage seam for it: a small [`KeyValueStore`] trait with a
//! TOML-file backend for real use and an in-memory backend for tests and
//! one-shot renders.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;

/// File name of the preferences store inside the config directory.
pub const PREFERENCES_FILE: &str = "preferences.toml";

/// Minimal string key/value storage.
///
/// Reads and writes are fallible so callers can decide how to degrade;
/// the theme store treats every failure as "use the default".
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a flat TOML table on disk.
///
/// # File Location
///
/// - Linux: `~/.config/folio/preferences.toml`
/// - macOS: `~/Library/Application Support/folio/preferences.toml`
/// - Windows: `%APPDATA%\folio\preferences.toml`
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at an explicit path. The file is created lazily on
    /// the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform-specific preferences location.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(Config::config_dir()?.join(PREFERENCES_FILE)))
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = fs::read_to_string(&self.path)
            .context(format!("Failed to read preferences: {}", self.path.display()))?;

        toml::from_str(&content)
            .context(format!("Failed to parse preferences: {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupt file is replaced rather than blocking the write
        let mut table = self.read_table().unwrap_or_default();
        table.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create preferences directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string(&table).context("Failed to serialize preferences")?;
        fs::write(&self.path, content)
            .context(format!("Failed to write preferences: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("portfolio-theme").unwrap(), None);

        store.set("portfolio-theme", "dark").unwrap();
        assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("prefs.toml"));

        assert_eq!(store.get("portfolio-theme").unwrap(), None);
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("prefs.toml");

        let mut store = FileStore::new(&path);
        store.set("portfolio-theme", "dark").unwrap();
        store.set("other", "value").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("portfolio-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("value"));
    }

    #[test]
    fn test_file_store_corrupt_file_errors_on_read() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let store = FileStore::new(&path);
        assert!(store.get("portfolio-theme").is_err());
    }

    #[test]
    fn test_file_store_write_replaces_corrupt_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "[[[").unwrap();

        let mut store = FileStore::new(&path);
        store.set("portfolio-theme", "light").unwrap();
        assert_eq!(store.get("portfolio-theme").unwrap().as_deref(), Some("light"));
    }
}
