//! Key-value storage port.

use super::error::StorageError;

/// A flat string-to-string store (browser local storage, a JSON file, memory).
///
/// Synchronous: local storage access is not a suspension point.
/// `keys` must return a stable order for an unchanged store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn save(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}
