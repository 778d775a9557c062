//! The merge point of SRD and homebrew data.

use serde_json::Value;

use charsmith_domain::{ResourceList, ResourceType};
use charsmith_shared::records::BaseResourceRecord;

use crate::infrastructure::ports::{ApiError, RepoError, StorageError};
use crate::infrastructure::srd_api::SrdApiService;
use crate::mappers::api::BaseResourceApiMapper;
use crate::mappers::record::BaseResourceRecordMapper;
use crate::mappers::Mapper;
use crate::repositories::homebrew::{HomebrewRepository, HOMEBREW_PREFIX};
use crate::repositories::schema::{
    ClassSchema, GenericSchema, RaceSchema, ResourceSchema, SkillSchema, SubclassSchema,
    SubraceSchema, TraitSchema,
};

/// Point lookups and listings for one resource kind.
///
/// Homebrew is consulted first: homebrew ids are UUIDs and never collide with
/// SRD slugs. Unknown ids resolve to `Ok(None)`.
#[derive(Clone)]
pub struct BaseResourceRepository<S: ResourceSchema> {
    pub(crate) schema: S,
    pub(crate) srd: SrdApiService,
    pub(crate) homebrew: HomebrewRepository,
}

pub type RaceRepository = BaseResourceRepository<RaceSchema>;
pub type SubraceRepository = BaseResourceRepository<SubraceSchema>;
pub type ClassRepository = BaseResourceRepository<ClassSchema>;
pub type SubclassRepository = BaseResourceRepository<SubclassSchema>;
pub type TraitRepository = BaseResourceRepository<TraitSchema>;
pub type SkillRepository = BaseResourceRepository<SkillSchema>;
pub type GenericRepository = BaseResourceRepository<GenericSchema>;

impl<S: ResourceSchema> BaseResourceRepository<S> {
    pub fn new(schema: S, srd: SrdApiService, homebrew: HomebrewRepository) -> Self {
        Self {
            schema,
            srd,
            homebrew,
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.schema.resource_type()
    }

    pub async fn get(&self, id: &str) -> Result<Option<S::Domain>, RepoError> {
        let resource_type = self.schema.resource_type();

        if let Some(raw) = self.homebrew.get_of_type::<Value>(id, resource_type)? {
            if !self.schema.accepts_record(&raw) {
                tracing::debug!(id, resource_type = %resource_type, "Homebrew record is of another kind");
                return Ok(None);
            }
            let record: S::Record = serde_json::from_value(raw)
                .map_err(|e| StorageError::serialization(format!("{HOMEBREW_PREFIX}{id}"), e))?;
            tracing::debug!(id, resource_type = %resource_type, source = "homebrew", "Resource resolved");
            return Ok(Some(self.schema.map_record(&record)));
        }

        let raw = match self.srd.get_by_index::<Value>(resource_type, id).await {
            Ok(raw) => raw,
            Err(RepoError::Api(e)) if e.is_not_found() => {
                tracing::debug!(id, resource_type = %resource_type, "Resource not found");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };
        if !self.schema.accepts_dto(&raw) {
            tracing::debug!(id, resource_type = %resource_type, "SRD resource is of another kind");
            return Ok(None);
        }
        let dto: S::Dto = serde_json::from_value(raw).map_err(|e| {
            let url = format!("{}/api/{}/{}", self.srd.base_url(), resource_type.api_path(), id);
            ApiError::invalid_response(url, e)
        })?;
        tracing::debug!(id, resource_type = %resource_type, source = "srd", "Resource resolved");
        Ok(Some(self.schema.map_dto(&dto)))
    }

    /// SRD listing followed by homebrew resources of the same kind.
    ///
    /// Kinds sharing a resource type are listed through their equipment category.
    pub async fn get_all(&self) -> Result<ResourceList, RepoError> {
        let resource_type = self.schema.resource_type();

        let srd = match self.schema.srd_category() {
            Some(category) => self.srd.get_equipment_category(category).await?.equipment,
            None => self.srd.get_resource_list(resource_type).await?.results,
        };
        let mut resources: ResourceList = srd
            .iter()
            .map(|r| BaseResourceApiMapper.map(r).with_resource_type(resource_type))
            .collect();

        for raw in self.homebrew.get_all_raw_by_resource_type(resource_type)? {
            if !self.schema.accepts_record(&raw) {
                continue;
            }
            let record: BaseResourceRecord = serde_json::from_value(raw)
                .map_err(|e| StorageError::serialization(HOMEBREW_PREFIX, e))?;
            resources.push(BaseResourceRecordMapper.map(&record));
        }

        Ok(resources)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::services;
    use super::*;
    use crate::infrastructure::ports::{HttpResponse, MockHttpPort};
    use charsmith_domain::HasBaseResource;
    use charsmith_shared::records::{BaseResourceRecord, RaceRecord, ResourceReferenceRecord};
    use uuid::Uuid;

    fn kobold(id: Uuid) -> RaceRecord {
        RaceRecord {
            base: BaseResourceRecord::new(id, "Kobold", ResourceType::Races),
            speed: 30,
            ability_bonuses: vec![],
            ability_bonus_options: None,
            alignment: String::new(),
            age: String::new(),
            size: "Small".into(),
            size_description: String::new(),
            starting_proficiencies: vec![],
            starting_proficiency_options: None,
            languages: vec![ResourceReferenceRecord {
                id: "draconic".into(),
                name: "Draconic".into(),
            }],
            language_options: None,
            language_desc: String::new(),
            traits: vec![],
            subraces: vec![],
        }
    }

    #[tokio::test]
    async fn homebrew_lookup_never_touches_network() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(0);
        let (srd, homebrew) = services(http);
        let id = Uuid::new_v4();
        homebrew.save(&id.to_string(), &kobold(id)).unwrap();

        let repo = RaceRepository::new(RaceSchema::default(), srd, homebrew);
        let race = repo.get(&id.to_string()).await.unwrap().unwrap();

        assert!(race.is_homebrew());
        assert_eq!(race.name(), "Kobold");
        assert_eq!(race.languages[0].id, "draconic");
    }

    #[tokio::test]
    async fn srd_lookup_maps_dto() {
        let mut http = MockHttpPort::new();
        http.expect_get()
            .withf(|url| url.ends_with("/api/races/elf"))
            .times(1)
            .returning(|_| {
                Ok(HttpResponse::ok(
                    r#"{"index": "elf", "name": "Elf", "speed": 30, "size": "Medium", "url": "/api/races/elf"}"#,
                ))
            });
        let (srd, homebrew) = services(http);

        let repo = RaceRepository::new(RaceSchema::default(), srd, homebrew);
        let race = repo.get("elf").await.unwrap().unwrap();
        assert!(!race.is_homebrew());
        assert_eq!(race.speed, 30);
    }

    #[tokio::test]
    async fn missing_resource_is_none() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 404,
                retry_after: None,
                body: r#"{"error": "Not found"}"#.into(),
            })
        });
        let (srd, homebrew) = services(http);

        let repo = RaceRepository::new(RaceSchema::default(), srd, homebrew);
        assert!(repo.get("tiefling-prime").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn server_errors_propagate() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(1).returning(|_| {
            Ok(HttpResponse {
                status: 500,
                retry_after: None,
                body: String::new(),
            })
        });
        let (srd, homebrew) = services(http);

        let repo = RaceRepository::new(RaceSchema::default(), srd, homebrew);
        assert!(repo.get("elf").await.is_err());
    }

    #[tokio::test]
    async fn get_all_lists_srd_then_homebrew() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(1).returning(|_| {
            Ok(HttpResponse::ok(
                r#"{"count": 2, "results": [
                    {"index": "dwarf", "name": "Dwarf", "url": "/api/races/dwarf"},
                    {"index": "elf", "name": "Elf", "url": "/api/races/elf"}
                ]}"#,
            ))
        });
        let (srd, homebrew) = services(http);
        let id = Uuid::new_v4();
        homebrew.save(&id.to_string(), &kobold(id)).unwrap();
        let language = BaseResourceRecord::new(Uuid::new_v4(), "Gnoll", ResourceType::Languages);
        homebrew.save(&language.id.to_string(), &language).unwrap();

        let repo = RaceRepository::new(RaceSchema::default(), srd, homebrew);
        let all = repo.get_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Dwarf", "Elf", "Kobold"]);
        assert!(!all[0].is_homebrew && !all[1].is_homebrew);
        assert!(all[2].is_homebrew);
        assert!(all
            .iter()
            .all(|r| r.resource_type == Some(ResourceType::Races)));
    }

    #[tokio::test]
    async fn generic_schema_types_its_results() {
        let mut http = MockHttpPort::new();
        http.expect_get().times(1).returning(|_| {
            Ok(HttpResponse::ok(
                r#"{"index": "common", "name": "Common", "url": "/api/languages/common", "type": "Standard"}"#,
            ))
        });
        let (srd, homebrew) = services(http);

        let repo = GenericRepository::new(GenericSchema::new(ResourceType::Languages), srd, homebrew);
        let language = repo.get("common").await.unwrap().unwrap();
        assert_eq!(language.resource_type, Some(ResourceType::Languages));
    }
}
