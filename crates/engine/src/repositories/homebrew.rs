//! User-authored records under the `homebrew_` storage namespace.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use charsmith_domain::ResourceType;
use charsmith_shared::records::BaseResourceRecord;

use crate::infrastructure::ports::{RepoError, StorageError};
use crate::infrastructure::storage::StorageService;
use crate::upgrade;

pub const HOMEBREW_PREFIX: &str = "homebrew_";

#[derive(Clone)]
pub struct HomebrewRepository {
    storage: StorageService,
}

impl HomebrewRepository {
    pub fn new(storage: StorageService) -> Self {
        Self { storage }
    }

    fn key(id: &str) -> String {
        format!("{HOMEBREW_PREFIX}{id}")
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self
            .storage
            .get_all_keys()?
            .into_iter()
            .filter(|k| k.starts_with(HOMEBREW_PREFIX))
            .collect())
    }

    pub fn get<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>, StorageError> {
        self.storage.get(&Self::key(id))
    }

    /// The record under `id`, or `None` when absent or of another resource type.
    pub fn get_of_type<T: DeserializeOwned>(
        &self,
        id: &str,
        resource_type: ResourceType,
    ) -> Result<Option<T>, StorageError> {
        let key = Self::key(id);
        let Some(raw) = self.storage.get_raw(&key)? else {
            return Ok(None);
        };
        if read_resource_type(&key, &raw)? != Some(resource_type) {
            return Ok(None);
        }
        serde_json::from_value(raw)
            .map(Some)
            .map_err(|e| StorageError::serialization(key, e))
    }

    pub fn save<T: Serialize + ?Sized>(&self, id: &str, record: &T) -> Result<(), StorageError> {
        self.storage.set(&Self::key(id), record)
    }

    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        self.storage.delete(&Self::key(id))
    }

    /// Every homebrew record's common fields, in storage key order.
    pub fn get_all(&self) -> Result<Vec<BaseResourceRecord>, StorageError> {
        let mut records = Vec::new();
        for key in self.keys()? {
            if let Some(record) = self.storage.get::<BaseResourceRecord>(&key)? {
                records.push(record);
            }
        }
        Ok(records)
    }

    pub fn get_all_by_resource_type(
        &self,
        resource_type: ResourceType,
    ) -> Result<Vec<BaseResourceRecord>, StorageError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|r| r.resource_type() == Some(resource_type))
            .collect())
    }

    /// Untyped bodies of every record of `resource_type`.
    pub fn get_all_raw_by_resource_type(
        &self,
        resource_type: ResourceType,
    ) -> Result<Vec<Value>, StorageError> {
        let mut values = Vec::new();
        for key in self.keys()? {
            if let Some(raw) = self.storage.get_raw(&key)? {
                if read_resource_type(&key, &raw)? == Some(resource_type) {
                    values.push(raw);
                }
            }
        }
        Ok(values)
    }

    /// Full records of `resource_type`, deserialized as `T`.
    pub fn get_all_records<T: DeserializeOwned>(
        &self,
        resource_type: ResourceType,
    ) -> Result<Vec<T>, StorageError> {
        self.get_all_raw_by_resource_type(resource_type)?
            .into_iter()
            .map(|raw| {
                serde_json::from_value(raw)
                    .map_err(|e| StorageError::serialization(HOMEBREW_PREFIX, e))
            })
            .collect()
    }

    /// Bring every stored record to the current schema version.
    ///
    /// Returns how many records were rewritten. Stops at the first record that
    /// cannot be upgraded.
    pub fn upgrade_all(&self) -> Result<usize, RepoError> {
        let mut upgraded = 0;
        for key in self.keys()? {
            let Some(raw) = self.storage.get_raw(&key)? else {
                continue;
            };
            match upgrade::upgrade_record(&key, raw) {
                Ok(Some(value)) => {
                    self.storage.set_raw(&key, &value)?;
                    upgraded += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(key = %key, error = %e, "Homebrew record upgrade failed");
                    return Err(e.into());
                }
            }
        }
        if upgraded > 0 {
            tracing::info!(upgraded, "Homebrew records upgraded");
        }
        Ok(upgraded)
    }
}

fn read_resource_type(key: &str, raw: &Value) -> Result<Option<ResourceType>, StorageError> {
    let base: BaseResourceRecord = serde_json::from_value(raw.clone())
        .map_err(|e| StorageError::serialization(key, e))?;
    Ok(base.resource_type())
}
