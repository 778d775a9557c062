//! Player character bank - every saved character under one storage key.
//!
//! The whole bank is the unit of persistence. Every mutation goes through
//! [`PlayerCharacterBank::update_character`] or one of the entry operations,
//! each of which rewrites the full bank before returning. A mutation is built
//! on a copy of the bank and only replaces the in-memory bank once the write
//! succeeded.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use charsmith_domain::{CharacterEntryId, DomainError, PlayerCharacter};

use crate::infrastructure::ports::{BankError, ClockPort, StorageError};
use crate::infrastructure::storage::StorageService;
use crate::upgrade::{rename_index_keys, upgrade_player_character_bank, CURRENT_BANK_VERSION};

pub const PLAYER_CHARACTER_BANK_KEY: &str = "playerCharacterBank";

const ENTRY: &str = "PlayerCharacterBankEntry";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerCharacterBankEntry {
    pub id: CharacterEntryId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub last_edit: DateTime<Utc>,
    pub version: u32,
    pub character: PlayerCharacter,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBank {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    active_id: Option<CharacterEntryId>,
    #[serde(default)]
    entries: Vec<PlayerCharacterBankEntry>,
}

impl StoredBank {
    fn position(&self, id: CharacterEntryId) -> Result<usize, BankError> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| BankError::entry_not_found(ENTRY, id))
    }

    fn repair_active(&mut self) {
        let valid = self
            .active_id
            .is_some_and(|id| self.entries.iter().any(|e| e.id == id));
        if !valid {
            self.active_id = self.entries.first().map(|e| e.id);
        }
    }
}

impl Default for StoredBank {
    fn default() -> Self {
        Self {
            version: CURRENT_BANK_VERSION,
            active_id: None,
            entries: Vec::new(),
        }
    }
}

/// Ordered list of characters with exactly one active entry while any exist.
pub struct PlayerCharacterBank {
    storage: StorageService,
    clock: Arc<dyn ClockPort>,
    bank: StoredBank,
}

impl PlayerCharacterBank {
    /// Load the bank, upgrading a stored older version in place first.
    pub fn load(storage: StorageService, clock: Arc<dyn ClockPort>) -> Result<Self, BankError> {
        let mut bank: StoredBank = match storage.get_raw(PLAYER_CHARACTER_BANK_KEY)? {
            None => StoredBank::default(),
            Some(raw) => {
                let upgraded = upgrade_player_character_bank(PLAYER_CHARACTER_BANK_KEY, raw.clone())?;
                let raw = match upgraded {
                    Some(upgraded) => {
                        storage.set_raw(PLAYER_CHARACTER_BANK_KEY, &upgraded)?;
                        tracing::info!("Upgraded player character bank");
                        upgraded
                    }
                    None => raw,
                };
                serde_json::from_value(raw)
                    .map_err(|e| StorageError::serialization(PLAYER_CHARACTER_BANK_KEY, e))?
            }
        };

        bank.repair_active();
        tracing::info!(entries = bank.entries.len(), "Loaded player character bank");
        Ok(Self {
            storage,
            clock,
            bank,
        })
    }

    pub fn save(&self) -> Result<(), BankError> {
        self.storage.set(PLAYER_CHARACTER_BANK_KEY, &self.bank)?;
        tracing::debug!(entries = self.bank.entries.len(), "Saved player character bank");
        Ok(())
    }

    pub fn entries(&self) -> &[PlayerCharacterBankEntry] {
        &self.bank.entries
    }

    pub fn get(&self, id: CharacterEntryId) -> Option<&PlayerCharacterBankEntry> {
        self.bank.entries.iter().find(|e| e.id == id)
    }

    pub fn active_id(&self) -> Option<CharacterEntryId> {
        self.bank.active_id
    }

    pub fn active_entry(&self) -> Option<&PlayerCharacterBankEntry> {
        self.bank.active_id.and_then(|id| self.get(id))
    }

    pub fn set_active(&mut self, id: CharacterEntryId) -> Result<(), BankError> {
        self.bank.position(id)?;
        let mut bank = self.bank.clone();
        bank.active_id = Some(id);
        self.commit(bank)
    }

    /// Create a default character. It becomes active when the bank was empty.
    pub fn add_new_character(&mut self, name: &str) -> Result<CharacterEntryId, BankError> {
        self.push(PlayerCharacter::new(name))
    }

    /// Add a character from exported JSON, renaming pre-versioning `index` keys.
    pub fn import_character(&mut self, mut raw: Value) -> Result<CharacterEntryId, BankError> {
        let version = raw.get("version").and_then(Value::as_u64).unwrap_or(0);
        if version < u64::from(PlayerCharacter::CURRENT_VERSION) {
            rename_index_keys(&mut raw);
            if let Some(object) = raw.as_object_mut() {
                object.insert("version".into(), PlayerCharacter::CURRENT_VERSION.into());
            }
        }
        let character: PlayerCharacter = serde_json::from_value(raw)
            .map_err(|e| StorageError::serialization("imported character", e))?;
        self.push(character)
    }

    /// Remove an entry. Removing the active entry activates the first remaining one.
    pub fn remove_entry(
        &mut self,
        id: CharacterEntryId,
    ) -> Result<PlayerCharacterBankEntry, BankError> {
        let index = self.bank.position(id)?;
        let mut bank = self.bank.clone();
        let removed = bank.entries.remove(index);
        if bank.active_id == Some(id) {
            bank.active_id = None;
        }
        bank.repair_active();
        self.commit(bank)?;
        Ok(removed)
    }

    /// Apply an edit to a character and persist the bank.
    pub fn update_character<R>(
        &mut self,
        id: CharacterEntryId,
        edit: impl FnOnce(&mut PlayerCharacter) -> R,
    ) -> Result<R, BankError> {
        self.try_update_character(id, |pc| Ok(edit(pc)))
    }

    /// Like [`Self::update_character`] for fallible edits. A failed edit
    /// leaves the stored character untouched.
    pub fn try_update_character<R>(
        &mut self,
        id: CharacterEntryId,
        edit: impl FnOnce(&mut PlayerCharacter) -> Result<R, DomainError>,
    ) -> Result<R, BankError> {
        let index = self.bank.position(id)?;
        let mut character = self.bank.entries[index].character.clone();
        let result = edit(&mut character)?;

        let mut bank = self.bank.clone();
        let entry = &mut bank.entries[index];
        entry.name = Some(character.name().to_string());
        entry.version = character.version();
        entry.character = character;
        entry.last_edit = self.clock.now();
        self.commit(bank)?;
        Ok(result)
    }

    fn push(&mut self, character: PlayerCharacter) -> Result<CharacterEntryId, BankError> {
        let id = CharacterEntryId::new();
        let mut bank = self.bank.clone();
        bank.entries.push(PlayerCharacterBankEntry {
            id,
            name: Some(character.name().to_string()),
            last_edit: self.clock.now(),
            version: character.version(),
            character,
        });
        bank.repair_active();
        self.commit(bank)?;
        tracing::debug!(%id, "Added player character");
        Ok(id)
    }

    /// Persist `bank`, then make it the in-memory state.
    fn commit(&mut self, bank: StoredBank) -> Result<(), BankError> {
        self.storage.set(PLAYER_CHARACTER_BANK_KEY, &bank)?;
        tracing::debug!(entries = bank.entries.len(), "Saved player character bank");
        self.bank = bank;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::local_store::InMemoryStore;
    use crate::infrastructure::ports::{KeyValueStore, MockClockPort, MockKeyValueStore};
    use chrono::TimeZone;
    use charsmith_domain::{Ability, ResourceReference};
    use serde_json::json;

    fn storage() -> StorageService {
        StorageService::new(Arc::new(InMemoryStore::new()))
    }

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()))
    }

    #[test]
    fn empty_storage_loads_empty_bank() {
        let bank = PlayerCharacterBank::load(storage(), clock()).unwrap();
        assert!(bank.entries().is_empty());
        assert!(bank.active_entry().is_none());
    }

    #[test]
    fn first_character_becomes_active_and_is_persisted() {
        let storage = storage();
        let mut bank = PlayerCharacterBank::load(storage.clone(), clock()).unwrap();

        let first = bank.add_new_character("Tordek").unwrap();
        let second = bank.add_new_character("Lidda").unwrap();
        assert_eq!(bank.active_id(), Some(first));

        let reloaded = PlayerCharacterBank::load(storage, clock()).unwrap();
        assert_eq!(reloaded.entries().len(), 2);
        assert_eq!(reloaded.active_id(), Some(first));
        assert_eq!(reloaded.get(second).unwrap().name.as_deref(), Some("Lidda"));
    }

    #[test]
    fn removing_active_entry_activates_first_remaining() {
        let mut bank = PlayerCharacterBank::load(storage(), clock()).unwrap();
        let first = bank.add_new_character("Tordek").unwrap();
        let second = bank.add_new_character("Lidda").unwrap();

        bank.remove_entry(first).unwrap();
        assert_eq!(bank.active_id(), Some(second));

        bank.remove_entry(second).unwrap();
        assert_eq!(bank.active_id(), None);
    }

    #[test]
    fn update_persists_immediately_and_stamps_last_edit() {
        let storage = storage();
        let mut creation_clock = MockClockPort::new();
        creation_clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let mut bank = PlayerCharacterBank::load(storage.clone(), Arc::new(creation_clock)).unwrap();
        let id = bank.add_new_character("Tordek").unwrap();

        let mut bank = PlayerCharacterBank::load(storage.clone(), clock()).unwrap();
        bank.try_update_character(id, |pc| pc.set_ability_score(Ability::Str, 16))
            .unwrap();
        let added = bank
            .update_character(id, |pc| {
                pc.add_proficiency_in_skill(ResourceReference::new("skill-athletics", "Athletics"))
            })
            .unwrap();
        assert!(added);

        let reloaded = PlayerCharacterBank::load(storage, clock()).unwrap();
        let entry = reloaded.get(id).unwrap();
        assert_eq!(entry.character.ability_score(Ability::Str), 16);
        assert!(entry.character.is_proficient_in_skill("skill-athletics"));
        assert_eq!(entry.last_edit, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    }

    #[test]
    fn failed_edit_leaves_character_untouched() {
        let mut bank = PlayerCharacterBank::load(storage(), clock()).unwrap();
        let id = bank.add_new_character("Tordek").unwrap();

        let err = bank
            .try_update_character(id, |pc| {
                pc.set_name("Renamed");
                pc.set_ability_score(Ability::Dex, 99)
            })
            .unwrap_err();

        assert!(matches!(err, BankError::Domain(_)));
        assert_eq!(bank.get(id).unwrap().character.name(), "Tordek");
    }

    /// A store holding `seed` whose writes always fail.
    fn read_only_storage(seed: &StorageService) -> StorageService {
        let raw = seed
            .get_raw(PLAYER_CHARACTER_BANK_KEY)
            .unwrap()
            .map(|v| v.to_string());
        let mut store = MockKeyValueStore::new();
        store.expect_load().returning(move |_| Ok(raw.clone()));
        store
            .expect_save()
            .returning(|_, _| Err(StorageError::io("disk full")));
        StorageService::new(Arc::new(store))
    }

    #[test]
    fn failed_save_leaves_bank_unchanged() {
        let seed = storage();
        let mut bank = PlayerCharacterBank::load(seed.clone(), clock()).unwrap();
        let first = bank.add_new_character("Tordek").unwrap();
        let second = bank.add_new_character("Lidda").unwrap();

        let mut bank = PlayerCharacterBank::load(read_only_storage(&seed), clock()).unwrap();
        let before: Vec<_> = bank.entries().to_vec();

        assert!(matches!(
            bank.add_new_character("Mialee"),
            Err(BankError::Storage(_))
        ));
        assert!(bank.remove_entry(first).is_err());
        assert!(bank.set_active(second).is_err());
        assert!(bank
            .update_character(first, |pc| pc.set_name("Renamed"))
            .is_err());

        assert_eq!(bank.entries(), before.as_slice());
        assert_eq!(bank.active_id(), Some(first));
        assert_eq!(bank.get(first).unwrap().character.name(), "Tordek");
    }

    #[test]
    fn failed_save_is_not_visible_after_reload() {
        let inner = Arc::new(InMemoryStore::new());
        let seed = StorageService::new(inner.clone());
        let mut bank = PlayerCharacterBank::load(seed, clock()).unwrap();
        let id = bank.add_new_character("Tordek").unwrap();

        let mut store = MockKeyValueStore::new();
        let reader = inner.clone();
        store.expect_load().returning(move |key| reader.load(key));
        store
            .expect_save()
            .returning(|_, _| Err(StorageError::io("disk full")));
        let storage = StorageService::new(Arc::new(store));
        let mut bank = PlayerCharacterBank::load(storage, clock()).unwrap();
        assert!(bank.remove_entry(id).is_err());
        assert!(bank.get(id).is_some());

        let reloaded = PlayerCharacterBank::load(StorageService::new(inner), clock()).unwrap();
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.active_id(), Some(id));
    }

    #[test]
    fn unknown_entry_is_not_found() {
        let mut bank = PlayerCharacterBank::load(storage(), clock()).unwrap();
        let err = bank.set_active(CharacterEntryId::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn legacy_bank_is_upgraded_on_load() {
        let storage = storage();
        let mut character = serde_json::to_value(PlayerCharacter::new("Mialee")).unwrap();
        character["race"] = json!({"index": "elf", "name": "Elf"});
        let id = CharacterEntryId::new();
        storage
            .set_raw(
                PLAYER_CHARACTER_BANK_KEY,
                &json!({
                    "entries": [{
                        "id": id,
                        "lastEdit": "2023-06-01T00:00:00Z",
                        "version": 0,
                        "character": character
                    }]
                }),
            )
            .unwrap();

        let bank = PlayerCharacterBank::load(storage.clone(), clock()).unwrap();
        assert_eq!(bank.active_id(), Some(id));
        let race = bank.active_entry().unwrap().character.race().unwrap();
        assert_eq!(race.id, "elf");

        let stored = storage.get_raw(PLAYER_CHARACTER_BANK_KEY).unwrap().unwrap();
        assert_eq!(stored["version"], json!(CURRENT_BANK_VERSION));
    }

    #[test]
    fn import_renames_legacy_index_keys() {
        let mut bank = PlayerCharacterBank::load(storage(), clock()).unwrap();
        let mut raw = serde_json::to_value(PlayerCharacter::new("Jozan")).unwrap();
        raw["version"] = json!(0);
        raw["proficiencies"] = json!([{"index": "skill-religion", "name": "Religion"}]);

        let id = bank.import_character(raw).unwrap();
        let character = &bank.get(id).unwrap().character;
        assert!(character.is_proficient_in_skill("skill-religion"));
        assert_eq!(character.version(), PlayerCharacter::CURRENT_VERSION);
    }
}
