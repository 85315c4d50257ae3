//! Best-effort key/value preference storage.

use crate::error::{Error, Result};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::RwLock;

/// A string key/value store for user preferences.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept as a flat TOML table on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(super::data_dir()?.join("preferences.toml")))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        toml::from_str(&content).map_err(|e| Error::preference(e.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&values).map_err(|e| Error::preference(e.to_string()))?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-process store, used when no data directory is available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: RwLock<HashMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self
            .values
            .read()
            .map_err(|e| Error::preference(e.to_string()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self
            .values
            .write()
            .map_err(|e| Error::preference(e.to_string()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
