//! Key-value store backends: in-memory and a JSON file on disk.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use directories::ProjectDirs;

use crate::infrastructure::ports::{KeyValueStore, StorageError};

/// Volatile store. Keys enumerate in insertion order.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    values: HashMap<String, String>,
    order: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::io(format!("storage lock poisoned: {e}"))
}

impl KeyValueStore for InMemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner
            .values
            .insert(key.to_string(), value.to_string())
            .is_none()
        {
            inner.order.push(key.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut inner = self.inner.write().map_err(poisoned)?;
        if inner.values.remove(key).is_some() {
            inner.order.retain(|k| k != key);
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.order.clone())
    }
}

/// File-backed store with file-based persistence
///
/// The whole map lives in memory and is written back as one pretty-printed JSON
/// object after every mutation. Keys enumerate in sorted order.
///
/// Default location (see [`FileStore::default_path`]):
/// - Linux: ~/.config/charsmith/storage.json
/// - macOS: ~/Library/Application Support/io.charsmith.charsmith/storage.json
/// - Windows: C:\Users\<User>\AppData\Roaming\charsmith\charsmith\config\storage.json
pub struct FileStore {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing data if the file exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let values = if path.exists() {
            let data = fs::read_to_string(&path).map_err(StorageError::io)?;
            serde_json::from_str::<BTreeMap<String, String>>(&data)
                .map_err(|e| StorageError::serialization(path.display().to_string(), e))?
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = values.len(), "File store opened");

        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Platform config directory, or the working directory when none is known.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("io", "charsmith", "charsmith") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            None => PathBuf::from("charsmith_storage.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::io)?;
            }
        }
        let data = serde_json::to_string_pretty(values)
            .map_err(|e| StorageError::serialization(self.path.display().to_string(), e))?;
        fs::write(&self.path, data).map_err(StorageError::io)
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().map_err(poisoned)?;
        if values.remove(key).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let values = self.values.read().map_err(poisoned)?;
        Ok(values.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_keeps_insertion_order() {
        let store = InMemoryStore::new();
        store.save("b", "1").unwrap();
        store.save("a", "2").unwrap();
        store.save("b", "3").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(store.load("b").unwrap().as_deref(), Some("3"));
    }

    #[test]
    fn memory_store_remove_is_noop_when_absent() {
        let store = InMemoryStore::new();
        store.save("a", "1").unwrap();
        store.remove("missing").unwrap();
        store.remove("a").unwrap();

        assert!(store.keys().unwrap().is_empty());
        assert!(store.load("a").unwrap().is_none());
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = FileStore::open(&path).unwrap();
        store.save("homebrew_1", r#"{"name":"Kobold"}"#).unwrap();
        store.save("cache_x", "[]").unwrap();
        store.remove("cache_x").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.keys().unwrap(), vec!["homebrew_1".to_string()]);
        assert_eq!(
            reopened.load("homebrew_1").unwrap().as_deref(),
            Some(r#"{"name":"Kobold"}"#)
        );
    }

    #[test]
    fn file_store_rejects_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Serialization { .. })));
    }
}
