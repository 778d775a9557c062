//! Application state and composition.
//!
//! [`App`] is the single owner of every service, repository and bank. It is
//! built once with [`App::load`] and passed to whatever drives the
//! application; nothing here is global.

use std::sync::Arc;

use charsmith_domain::ResourceType;

use crate::banks::{HomebrewBank, PlayerCharacterBank};
use crate::infrastructure::{
    api::{ApiService, RetryConfig},
    cache::CacheService,
    clock::SystemClock,
    http::ReqwestHttpClient,
    local_store::{FileStore, InMemoryStore},
    ports::{ApiError, BankError, ClockPort, HttpPort, KeyValueStore, RepoError, StorageError},
    settings::{AppConfig, StorageLocation},
    srd_api::SrdApiService,
    storage::StorageService,
};
use crate::repositories::{
    ArmorRepository, ArmorSchema, ClassLevelRepository, ClassLevelSchema, ClassRepository,
    ClassSchema, FeatureRepository, FeatureSchema, GenericRepository, GenericSchema,
    HomebrewRepository, RaceRepository, RaceSchema, SkillRepository, SkillSchema,
    SubclassRepository, SubclassSchema, SubraceRepository, SubraceSchema, TraitRepository,
    TraitSchema, WeaponRepository, WeaponSchema,
};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Http(#[from] ApiError),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Bank(#[from] BankError),
}

/// Main application state.
pub struct App {
    pub config: AppConfig,
    pub storage: StorageService,
    pub cache: CacheService,
    pub homebrew: HomebrewRepository,
    pub srd: SrdApiService,
    pub repositories: Repositories,
    pub player_characters: PlayerCharacterBank,
    pub homebrew_bank: HomebrewBank,
}

/// One repository per resource type with a typed domain model.
pub struct Repositories {
    pub race: RaceRepository,
    pub subrace: SubraceRepository,
    pub class: ClassRepository,
    pub subclass: SubclassRepository,
    pub traits: TraitRepository,
    pub feature: FeatureRepository,
    pub class_level: ClassLevelRepository,
    pub skill: SkillRepository,
    pub weapon: WeaponRepository,
    pub armor: ArmorRepository,
}

impl Repositories {
    fn new(srd: &SrdApiService, homebrew: &HomebrewRepository) -> Self {
        let (s, h) = (srd, homebrew);
        Self {
            race: RaceRepository::new(RaceSchema::default(), s.clone(), h.clone()),
            subrace: SubraceRepository::new(SubraceSchema::default(), s.clone(), h.clone()),
            class: ClassRepository::new(ClassSchema::default(), s.clone(), h.clone()),
            subclass: SubclassRepository::new(SubclassSchema::default(), s.clone(), h.clone()),
            traits: TraitRepository::new(TraitSchema::default(), s.clone(), h.clone()),
            feature: FeatureRepository::new(FeatureSchema::default(), s.clone(), h.clone()),
            class_level: ClassLevelRepository::new(ClassLevelSchema::default(), s.clone(), h.clone()),
            skill: SkillRepository::new(SkillSchema::default(), s.clone(), h.clone()),
            weapon: WeaponRepository::new(WeaponSchema::default(), s.clone(), h.clone()),
            armor: ArmorRepository::new(ArmorSchema::default(), s.clone(), h.clone()),
        }
    }
}

impl App {
    /// Build the application from configuration.
    ///
    /// Opens the configured store, upgrades stored homebrew records and loads
    /// both banks. A record that cannot be upgraded aborts startup.
    pub async fn load(config: AppConfig) -> Result<Self, StartupError> {
        let store: Arc<dyn KeyValueStore> = match &config.storage {
            StorageLocation::InMemory => Arc::new(InMemoryStore::new()),
            StorageLocation::File(path) => {
                tracing::info!(path = %path.display(), "Opening storage file");
                Arc::new(FileStore::open(path)?)
            }
        };
        let http: Arc<dyn HttpPort> =
            Arc::new(ReqwestHttpClient::with_timeout(config.http_timeout_secs)?);
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        Self::from_parts(config, store, http, clock)
    }

    /// Wire the application around already-built adapters.
    pub fn from_parts(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        http: Arc<dyn HttpPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, StartupError> {
        let storage = StorageService::new(store);
        let cache = CacheService::new(storage.clone());
        let homebrew = HomebrewRepository::new(storage.clone());

        let retry = RetryConfig {
            max_retries: config.max_retries,
            ..RetryConfig::default()
        };
        let api = ApiService::new(http, retry);
        let srd = SrdApiService::new(api, cache.clone(), &config.api_base_url);

        homebrew.upgrade_all()?;
        let player_characters = PlayerCharacterBank::load(storage.clone(), clock.clone())?;
        let homebrew_bank = HomebrewBank::load(storage.clone(), homebrew.clone(), clock)?;

        let repositories = Repositories::new(&srd, &homebrew);

        tracing::info!(
            api = %srd.base_url(),
            characters = player_characters.entries().len(),
            homebrew = homebrew_bank.entries().len(),
            "Application ready"
        );

        Ok(Self {
            config,
            storage,
            cache,
            homebrew,
            srd,
            repositories,
            player_characters,
            homebrew_bank,
        })
    }

    /// Untyped repository for resource types without a dedicated model.
    pub fn generic(&self, resource_type: ResourceType) -> GenericRepository {
        GenericRepository::new(
            GenericSchema::new(resource_type),
            self.srd.clone(),
            self.homebrew.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort, UpgradeError};
    use chrono::{TimeZone, Utc};
    use charsmith_domain::HasBaseResource;
    use serde_json::json;
    use uuid::Uuid;

    fn clock() -> Arc<dyn ClockPort> {
        Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 2, 2, 0, 0, 0).unwrap()))
    }

    fn offline() -> Arc<dyn HttpPort> {
        let mut http = MockHttpPort::new();
        http.expect_get().times(0);
        Arc::new(http)
    }

    #[test]
    fn startup_upgrades_legacy_homebrew_and_indexes_it() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        let id = Uuid::new_v4();
        store
            .save(
                &format!("homebrew_{id}"),
                &json!({
                    "id": id,
                    "name": "Kenku",
                    "resourceType": "races",
                    "speed": 30,
                    "abilityBonuses": [],
                    "alignment": "",
                    "age": "",
                    "size": "Medium",
                    "sizeDescription": "",
                    "startingProficiencies": [],
                    "startingProficiencyOptions": null,
                    "languages": [{"index": "common", "name": "Common"}],
                    "languageDesc": "",
                    "traits": [],
                    "subraces": []
                })
                .to_string(),
            )
            .unwrap();

        let app = App::from_parts(AppConfig::in_memory(), store, offline(), clock()).unwrap();

        let entries = app.homebrew_bank.entries_by_type(ResourceType::Races);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Kenku");

        let raw = app.homebrew.get::<serde_json::Value>(&id.to_string()).unwrap().unwrap();
        assert_eq!(raw["languages"][0]["id"], json!("common"));
        assert_eq!(raw["resourceType"], json!(ResourceType::Races.ordinal()));
    }

    #[test]
    fn unknown_legacy_type_aborts_startup() {
        let store: Arc<dyn KeyValueStore> = Arc::new(InMemoryStore::new());
        let id = Uuid::new_v4();
        store
            .save(
                &format!("homebrew_{id}"),
                &json!({"id": id, "name": "Warp Drive", "resourceType": "starships"}).to_string(),
            )
            .unwrap();

        let err = App::from_parts(AppConfig::in_memory(), store, offline(), clock())
            .err()
            .unwrap();
        assert!(matches!(
            err,
            StartupError::Repo(RepoError::Upgrade(UpgradeError::UnknownResourceType(_)))
        ));
    }

    #[tokio::test]
    async fn generic_repository_uses_configured_base_url() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.starts_with("http://localhost:3000/api/spells"))
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::ok(
                    r#"{"count": 1, "results": [{"index": "light", "name": "Light", "url": "/api/spells/light"}]}"#,
                ))
            });
        let config = AppConfig {
            api_base_url: "http://localhost:3000/".into(),
            ..AppConfig::in_memory()
        };

        let app = App::from_parts(
            config,
            Arc::new(InMemoryStore::new()),
            Arc::new(http),
            clock(),
        )
        .unwrap();

        let spells = app.generic(ResourceType::Spells).get_all().await.unwrap();
        assert_eq!(spells.len(), 1);
        assert_eq!(spells[0].id(), "light");
    }

    #[tokio::test]
    async fn load_with_in_memory_config_starts_empty() {
        let app = App::load(AppConfig::in_memory()).await.unwrap();
        assert!(app.player_characters.entries().is_empty());
        assert!(app.homebrew_bank.entries().is_empty());
    }
}
