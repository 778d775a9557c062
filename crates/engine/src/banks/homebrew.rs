//! Homebrew bank - metadata index over the `homebrew_{id}` records.
//!
//! A record write and its index write either both land or neither does. When
//! the second write fails the first one is undone before the error returns.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use charsmith_domain::{HomebrewId, ResourceType};
use charsmith_shared::records::HomebrewRecord;

use crate::infrastructure::ports::{BankError, ClockPort, StorageError, UpgradeError};
use crate::infrastructure::storage::StorageService;
use crate::repositories::HomebrewRepository;
use crate::upgrade::CURRENT_BANK_VERSION;

pub const HOMEBREW_BANK_KEY: &str = "homebrewBank";

const ENTRY: &str = "HomebrewBankEntry";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomebrewBankEntry {
    pub id: HomebrewId,
    pub name: String,
    pub resource_type: ResourceType,
    pub last_edit: DateTime<Utc>,
    pub version: u32,
}

#[derive(Debug, Serialize)]
struct StoredBank<'a> {
    version: u32,
    entries: &'a [HomebrewBankEntry],
}

/// Stored entry as read back. Name and type are taken from the record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEntry {
    id: Uuid,
    #[serde(default)]
    last_edit: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
struct LoadedBank {
    #[serde(default)]
    entries: Vec<StoredEntry>,
}

pub struct HomebrewBank {
    storage: StorageService,
    homebrew: HomebrewRepository,
    clock: Arc<dyn ClockPort>,
    entries: Vec<HomebrewBankEntry>,
}

impl HomebrewBank {
    /// Load the index and reconcile it with the records actually in storage.
    ///
    /// Entries whose record is gone are dropped. Records missing from the
    /// index are appended. Records must already be upgraded.
    pub fn load(
        storage: StorageService,
        homebrew: HomebrewRepository,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, BankError> {
        let stored: LoadedBank = match storage.get_raw(HOMEBREW_BANK_KEY)? {
            Some(raw) => serde_json::from_value(raw)
                .map_err(|e| StorageError::serialization(HOMEBREW_BANK_KEY, e))?,
            None => LoadedBank::default(),
        };

        let mut records = HashMap::new();
        let mut record_order = Vec::new();
        for record in homebrew.get_all()? {
            let Some(resource_type) = record.resource_type() else {
                tracing::warn!(id = %record.id, "Skipping homebrew record with unknown resource type");
                continue;
            };
            record_order.push(record.id);
            records.insert(record.id, (record, resource_type));
        }

        let now = clock.now();
        let mut entries = Vec::with_capacity(records.len());
        for stored_entry in &stored.entries {
            match records.remove(&stored_entry.id) {
                Some((record, resource_type)) => entries.push(HomebrewBankEntry {
                    id: HomebrewId::from_uuid(record.id),
                    name: record.name,
                    resource_type,
                    last_edit: stored_entry.last_edit.unwrap_or(now),
                    version: record.version,
                }),
                None => tracing::warn!(id = %stored_entry.id, "Dropping homebrew bank entry without record"),
            }
        }
        for id in record_order {
            if let Some((record, resource_type)) = records.remove(&id) {
                entries.push(HomebrewBankEntry {
                    id: HomebrewId::from_uuid(record.id),
                    name: record.name,
                    resource_type,
                    last_edit: now,
                    version: record.version,
                });
            }
        }

        tracing::info!(entries = entries.len(), "Loaded homebrew bank");
        Ok(Self {
            storage,
            homebrew,
            clock,
            entries,
        })
    }

    pub fn save(&self) -> Result<(), BankError> {
        self.save_entries(&self.entries)
    }

    pub fn entries(&self) -> &[HomebrewBankEntry] {
        &self.entries
    }

    pub fn entries_by_type(&self, resource_type: ResourceType) -> Vec<&HomebrewBankEntry> {
        self.entries
            .iter()
            .filter(|e| e.resource_type == resource_type)
            .collect()
    }

    pub fn get(&self, id: HomebrewId) -> Option<&HomebrewBankEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Store a new record and index it. An existing id is overwritten.
    pub fn add_record<T>(&mut self, record: &T) -> Result<HomebrewId, BankError>
    where
        T: HomebrewRecord + Serialize,
    {
        let id = HomebrewId::from_uuid(record.base().id);
        let entry = self.entry_for(record)?;
        let mut entries = self.entries.clone();
        match entries.iter_mut().find(|e| e.id == id) {
            Some(existing) => *existing = entry,
            None => entries.push(entry),
        }
        self.write(id, record, entries)?;
        tracing::debug!(%id, "Added homebrew record");
        Ok(id)
    }

    /// Overwrite an indexed record and refresh its entry.
    pub fn update_record<T>(&mut self, record: &T) -> Result<(), BankError>
    where
        T: HomebrewRecord + Serialize,
    {
        let id = HomebrewId::from_uuid(record.base().id);
        let index = self.position(id)?;
        let mut entries = self.entries.clone();
        entries[index] = self.entry_for(record)?;
        self.write(id, record, entries)
    }

    /// Drop an entry together with its record.
    pub fn remove_entry(&mut self, id: HomebrewId) -> Result<HomebrewBankEntry, BankError> {
        let index = self.position(id)?;
        let mut entries = self.entries.clone();
        let removed = entries.remove(index);

        self.save_entries(&entries)?;
        if let Err(e) = self.homebrew.delete(&id.to_string()) {
            if let Err(restore) = self.save_entries(&self.entries) {
                tracing::error!(%id, error = %restore, "Failed to restore homebrew bank index");
            }
            return Err(e.into());
        }
        self.entries = entries;
        Ok(removed)
    }

    /// Store `record`, then the index `entries`. On an index failure the
    /// previous record (or its absence) is put back.
    fn write<T>(
        &mut self,
        id: HomebrewId,
        record: &T,
        entries: Vec<HomebrewBankEntry>,
    ) -> Result<(), BankError>
    where
        T: HomebrewRecord + Serialize,
    {
        let key = id.to_string();
        let previous = self.homebrew.get::<Value>(&key)?;
        self.homebrew.save(&key, record)?;

        if let Err(e) = self.save_entries(&entries) {
            let restored = match &previous {
                Some(old) => self.homebrew.save(&key, old),
                None => self.homebrew.delete(&key),
            };
            if let Err(restore) = restored {
                tracing::error!(%id, error = %restore, "Failed to restore homebrew record");
            }
            return Err(e);
        }
        self.entries = entries;
        Ok(())
    }

    fn save_entries(&self, entries: &[HomebrewBankEntry]) -> Result<(), BankError> {
        self.storage.set(
            HOMEBREW_BANK_KEY,
            &StoredBank {
                version: CURRENT_BANK_VERSION,
                entries,
            },
        )?;
        Ok(())
    }

    fn entry_for<T: HomebrewRecord>(&self, record: &T) -> Result<HomebrewBankEntry, BankError> {
        let base = record.base();
        let resource_type = base
            .resource_type()
            .ok_or_else(|| UpgradeError::unknown_resource_type(&base.resource_type))?;
        Ok(HomebrewBankEntry {
            id: HomebrewId::from_uuid(base.id),
            name: base.name.clone(),
            resource_type,
            last_edit: self.clock.now(),
            version: base.version,
        })
    }

    fn position(&self, id: HomebrewId) -> Result<usize, BankError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BankError::entry_not_found(ENTRY, id))
    }
}
