//! Typed JSON access over a [`KeyValueStore`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::infrastructure::ports::{KeyValueStore, StorageError};

/// JSON get/set/delete over raw string storage.
///
/// A missing key is `Ok(None)`. Malformed stored JSON is an error.
#[derive(Clone)]
pub struct StorageService {
    store: Arc<dyn KeyValueStore>,
}

impl StorageService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.load(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| StorageError::serialization(key, e)),
            None => Ok(None),
        }
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e))?;
        tracing::debug!(key, bytes = raw.len(), "Storage write");
        self.store.save(key, &raw)
    }

    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove(key)
    }

    pub fn get_all_keys(&self) -> Result<Vec<String>, StorageError> {
        self.store.keys()
    }

    /// Untyped read, for migrations that work on the JSON tree.
    pub fn get_raw(&self, key: &str) -> Result<Option<Value>, StorageError> {
        self.get(key)
    }

    pub fn set_raw(&self, key: &str, value: &Value) -> Result<(), StorageError> {
        self.set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::local_store::InMemoryStore;
    use crate::infrastructure::ports::MockKeyValueStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        level: u8,
    }

    fn service() -> StorageService {
        StorageService::new(Arc::new(InMemoryStore::new()))
    }

    #[test]
    fn set_then_get_returns_equal_value() {
        let storage = service();
        let value = Sample {
            name: "Tordek".into(),
            level: 3,
        };
        storage.set("pc", &value).unwrap();

        assert_eq!(storage.get::<Sample>("pc").unwrap(), Some(value));
    }

    #[test]
    fn missing_key_is_none() {
        let storage = service();
        assert_eq!(storage.get::<Sample>("nothing").unwrap(), None);
    }

    #[test]
    fn delete_absent_key_is_ok() {
        let storage = service();
        storage.delete("nothing").unwrap();
        assert!(storage.get_all_keys().unwrap().is_empty());
    }

    #[test]
    fn malformed_json_is_serialization_error() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_load()
            .returning(|_| Ok(Some("{not json".to_string())));
        let storage = StorageService::new(Arc::new(store));

        let result = storage.get::<Sample>("broken");
        assert!(matches!(
            result,
            Err(StorageError::Serialization { ref key, .. }) if key == "broken"
        ));
    }

    #[test]
    fn raw_values_round_trip() {
        let storage = service();
        let value = serde_json::json!({"index": "elf", "nested": [{"index": "x"}]});
        storage.set_raw("raw", &value).unwrap();
        assert_eq!(storage.get_raw("raw").unwrap(), Some(value));
    }
}
