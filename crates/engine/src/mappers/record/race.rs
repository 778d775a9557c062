use charsmith_domain::{Race, Subrace, Trait};
use charsmith_shared::records::{RaceRecord, SubraceRecord, TraitRecord};

use super::common::{AbilityBonusRecordMapper, BaseResourceRecordMapper, ResourceReferenceRecordMapper};
use crate::mappers::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct RaceRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
    ability_bonus: AbilityBonusRecordMapper,
}

impl RaceRecordMapper {
    pub fn new(
        base: BaseResourceRecordMapper,
        reference: ResourceReferenceRecordMapper,
        ability_bonus: AbilityBonusRecordMapper,
    ) -> Self {
        Self {
            base,
            reference,
            ability_bonus,
        }
    }
}

impl Mapper<RaceRecord, Race> for RaceRecordMapper {
    fn map(&self, source: &RaceRecord) -> Race {
        Race {
            base: self.base.map(&source.base),
            speed: source.speed,
            ability_bonuses: self.ability_bonus.map_all(&source.ability_bonuses),
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

#[derive(Debug, Clone, Copy, Default)]
pub struct SubraceRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
    ability_bonus: AbilityBonusRecordMapper,
}

impl Mapper<SubraceRecord, Subrace> for SubraceRecordMapper {
    fn map(&self, source: &SubraceRecord) -> Subrace {
        Subrace {
            base: self.base.map(&source.base),
            race: self.reference.map(&source.race),
            desc: source.desc.clone(),
            ability_bonuses: self.ability_bonus.map_all(&source.ability_bonuses),
            starting_proficiencies: self.reference.map_all(&source.starting_proficiencies),
            languages: self.reference.map_all(&source.languages),
            language_options: source.language_options.clone(),
            racial_traits: self.reference.map_all(&source.racial_traits),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TraitRecordMapper {
    base: BaseResourceRecordMapper,
    reference: ResourceReferenceRecordMapper,
}

impl Mapper<TraitRecord, Trait> for TraitRecordMapper {
    fn map(&self, source: &TraitRecord) -> Trait {
        Trait {
            base: self.base.map(&source.base),
            races: self.reference.map_all(&source.races),
            subraces: self.reference.map_all(&source.subraces),
            desc: source.desc.clone(),
            proficiencies: self.reference.map_all(&source.proficiencies),
            proficiency_choices: source.proficiency_choices.clone(),
            language_options: source.language_options.clone(),
            parent: self.reference.map_option(source.parent.as_ref()),
            trait_specific: None,
        }
    }
}
