use charsmith_domain::{ResourceType, Skill};
use charsmith_shared::api::SkillDto;

use super::common::{BaseResourceApiMapper, ResourceReferenceApiMapper};
use crate::mappers::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
}

impl Mapper<SkillDto, Skill> for SkillApiMapper {
    fn map(&self, source: &SkillDto) -> Skill {
        Skill {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Skills),
            desc: source.desc.clone(),
            ability_score: self.reference.map(&source.ability_score),
        }
    }
}
