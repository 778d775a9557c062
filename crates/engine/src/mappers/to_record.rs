//! Domain -> homebrew storage record.

use charsmith_domain::{BaseResource, Race, ResourceReference, ResourceType, Subclass};
use charsmith_shared::records::{
    AbilityBonusRecord, BaseResourceRecord, RaceRecord, ResourceReferenceRecord,
    StoredResourceType, SubclassRecord, SubclassSpellRecord, CURRENT_RECORD_VERSION,
};
use uuid::Uuid;

use crate::mappers::Mapper;

/// Namespace for ids derived from SRD slugs.
const SRD_SLUG_NAMESPACE: Uuid = Uuid::from_u128(0x6a1f_3c2e_9d0b_4f57_8e64_2b7c_15d9_a0e3);

/// Writes the current record version.
///
/// A resource whose id is not a UUID (an SRD slug being copied into homebrew)
/// gets a name-based v5 id derived from the slug, so the same slug always maps
/// to the same record id. The configured type is used when the resource is
/// untyped.
#[derive(Debug, Clone, Copy)]
pub struct BaseResourceToRecordMapper {
    fallback_type: ResourceType,
}

impl BaseResourceToRecordMapper {
    pub fn new(fallback_type: ResourceType) -> Self {
        Self { fallback_type }
    }
}

impl Mapper<BaseResource, BaseResourceRecord> for BaseResourceToRecordMapper {
    fn map(&self, source: &BaseResource) -> BaseResourceRecord {
        BaseResourceRecord {
            version: CURRENT_RECORD_VERSION,
            id: Uuid::parse_str(&source.id)
                .unwrap_or_else(|_| Uuid::new_v5(&SRD_SLUG_NAMESPACE, source.id.as_bytes())),
            name: source.name.clone(),
            resource_type: StoredResourceType::Current(
                source.resource_type.unwrap_or(self.fallback_type),
            ),
            notes: source.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceReferenceToRecordMapper;

impl Mapper<ResourceReference, ResourceReferenceRecord> for ResourceReferenceToRecordMapper {
    fn map(&self, source: &ResourceReference) -> ResourceReferenceRecord {
        ResourceReferenceRecord {
            id: source.id.clone(),
            name: source.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RaceToRecordMapper {
    base: BaseResourceToRecordMapper,
    reference: ResourceReferenceToRecordMapper,
}

impl RaceToRecordMapper {
    pub fn new(base: BaseResourceToRecordMapper, reference: ResourceReferenceToRecordMapper) -> Self {
        Self { base, reference }
    }
}

impl Default for RaceToRecordMapper {
    fn default() -> Self {
        Self::new(
            BaseResourceToRecordMapper::new(ResourceType::Races),
            ResourceReferenceToRecordMapper,
        )
    }
}

impl Mapper<Race, RaceRecord> for RaceToRecordMapper {
    fn map(&self, source: &Race) -> RaceRecord {
        RaceRecord {
            base: self.base.map(&source.base),
            speed: source.speed,
            ability_bonuses: source
                .ability_bonuses
                .iter()
                .map(|b| AbilityBonusRecord {
                    ability_score: self.reference.map(&b.ability_score),
                    bonus: b.bonus,
                })
                .collect(),
            ability_bonus_options: source.ability_bonus_options.clone(),
            alignment: source.alignment.clone(),
            age: source.age.clone(),
            size: source.size.clone(),
            size_description: source.size_description.clone(),
            starting_proficiencies: self.reference.map_all(&source.starting_proficiencies),
            starting_proficiency_options: source.starting_proficiency_options.clone(),
            languages: self.reference.map_all(&source.languages),
            language_options: source.language_options.clone(),
            language_desc: source.language_desc.clone(),
            traits: self.reference.map_all(&source.traits),
            subraces: self.reference.map_all(&source.subraces),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SubclassToRecordMapper {
    base: BaseResourceToRecordMapper,
    reference: ResourceReferenceToRecordMapper,
}

impl Default for SubclassToRecordMapper {
    fn default() -> Self {
        Self {
            base: BaseResourceToRecordMapper::new(ResourceType::Subclasses),
            reference: ResourceReferenceToRecordMapper,
        }
    }
}

impl Mapper<Subclass, SubclassRecord> for SubclassToRecordMapper {
    fn map(&self, source: &Subclass) -> SubclassRecord {
        SubclassRecord {
            base: self.base.map(&source.base),
            class: self.reference.map(&source.class),
            subclass_flavor: source.subclass_flavor.clone(),
            desc: source.desc.clone(),
            spells: source
                .spells
                .iter()
                .map(|s| SubclassSpellRecord {
                    prerequisites: self.reference.map_all(&s.prerequisites),
                    spell: self.reference.map(&s.spell),
                })
                .collect(),
        }
    }
}
