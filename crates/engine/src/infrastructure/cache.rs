//! Memoization of reference API responses in local storage.
//!
//! Entries never expire and are never evicted. The reference data set is
//! small and static, so [`CacheService::clear`] is the only invalidation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::infrastructure::ports::StorageError;
use crate::infrastructure::storage::StorageService;

pub const CACHE_PREFIX: &str = "cache_";

#[derive(Clone)]
pub struct CacheService {
    storage: StorageService,
}

impl CacheService {
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    fn key(key: &str) -> String {
        format!("{CACHE_PREFIX}{key}")
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let value = self.storage.get(&Self::key(key))?;
        tracing::debug!(key, hit = value.is_some(), "Cache lookup");
        Ok(value)
    }

    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        self.storage.set(&Self::key(key), value)
    }

    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.storage.delete(&Self::key(key))
    }

    /// Remove every cached response and return how many were removed.
    pub fn clear(&self) -> Result<usize, StorageError> {
        let keys: Vec<String> = self
            .storage
            .get_all_keys()?
            .into_iter()
            .filter(|k| k.starts_with(CACHE_PREFIX))
            .collect();
        for key in &keys {
            self.storage.delete(key)?;
        }
        tracing::info!(removed = keys.len(), "Cache cleared");
        Ok(keys.len())
    }
}
