use charsmith_domain::{AbilityBonus, BaseResource, ResourceReference};
use charsmith_shared::records::{AbilityBonusRecord, BaseResourceRecord, ResourceReferenceRecord};

use crate::mappers::Mapper;

/// Homebrew identity. Records are always homebrew and never carry a url.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseResourceRecordMapper;

impl Mapper<BaseResourceRecord, BaseResource> for BaseResourceRecordMapper {
    fn map(&self, source: &BaseResourceRecord) -> BaseResource {
        BaseResource {
            id: source.id.to_string(),
            name: source.name.clone(),
            url: None,
            resource_type: source.resource_type(),
            is_homebrew: true,
            notes: source.notes.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceReferenceRecordMapper;

impl Mapper<ResourceReferenceRecord, ResourceReference> for ResourceReferenceRecordMapper {
    fn map(&self, source: &ResourceReferenceRecord) -> ResourceReference {
        ResourceReference::new(source.id.clone(), source.name.clone())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AbilityBonusRecordMapper {
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<AbilityBonusRecord, AbilityBonus> for AbilityBonusRecordMapper {
    fn map(&self, source: &AbilityBonusRecord) -> AbilityBonus {
        AbilityBonus {
            ability_score: self.reference.map(&source.ability_score),
            bonus: source.bonus,
        }
    }
}

/// For resource kinds without a dedicated record shape (languages, alignments, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericRecordMapper {
    base: BaseResourceRecordMapper,
}

impl Mapper<BaseResourceRecord, BaseResource> for GenericRecordMapper {
    fn map(&self, source: &BaseResourceRecord) -> BaseResource {
        self.base.map(source)
    }
}
