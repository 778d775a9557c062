//! Class, subclass, class level and feature payloads.

use charsmith_domain::{
    AbilityPrerequisite, Class, ClassLevel, Feature, FeaturePrerequisite, FeatureSpecific,
    LevelSpellcasting, Multiclassing, ResourceType, Spellcasting, SpellcastingInfo,
    StartingEquipment, Subclass, SubclassSpell,
};
use charsmith_shared::api::{
    ClassDto, ClassLevelDto, FeatureDto, FeaturePrerequisiteDto, SubclassDto,
};

use super::choice::ChoiceApiMapper;
use super::common::{BaseResourceApiMapper, ResourceReferenceApiMapper};
use crate::mappers::Mapper;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
    choice: ChoiceApiMapper,
}

impl ClassApiMapper {
    pub fn new(
        base: BaseResourceApiMapper,
        reference: ResourceReferenceApiMapper,
        choice: ChoiceApiMapper,
    ) -> Self {
        Self {
            base,
            reference,
            choice,
        }
    }
}

impl Mapper<ClassDto, Class> for ClassApiMapper {
    fn map(&self, source: &ClassDto) -> Class {
        Class {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Classes),
            hit_die: source.hit_die,
            proficiency_choices: self.choice.map_all(&source.proficiency_choices),
            proficiencies: self.reference.map_all(&source.proficiencies),
            saving_throws: self.reference.map_all(&source.saving_throws),
            starting_equipment: source
                .starting_equipment
                .iter()
                .map(|e| StartingEquipment {
                    equipment: self.reference.map(&e.equipment),
                    quantity: e.quantity,
                })
                .collect(),
            starting_equipment_options: self.choice.map_all(&source.starting_equipment_options),
            subclasses: self.reference.map_all(&source.subclasses),
            spellcasting: source.spellcasting.as_ref().map(|s| Spellcasting {
                level: s.level,
                spellcasting_ability: self.reference.map(&s.spellcasting_ability),
                info: s
                    .info
                    .iter()
                    .map(|i| SpellcastingInfo {
                        name: i.name.clone(),
                        desc: i.desc.clone(),
                    })
                    .collect(),
            }),
            multi_classing: source.multi_classing.as_ref().map(|m| Multiclassing {
                prerequisites: m
                    .prerequisites
                    .iter()
                    .map(|p| AbilityPrerequisite {
                        ability_score: self.reference.map(&p.ability_score),
                        minimum_score: p.minimum_score,
                    })
                    .collect(),
                prerequisite_options: self.choice.map_option(m.prerequisite_options.as_ref()),
                proficiencies: self.reference.map_all(&m.proficiencies),
                proficiency_choices: self.choice.map_all(&m.proficiency_choices),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SubclassApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
}

impl Mapper<SubclassDto, Subclass> for SubclassApiMapper {
    fn map(&self, source: &SubclassDto) -> Subclass {
        Subclass {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Subclasses),
            class: self.reference.map(&source.class),
            subclass_flavor: source.subclass_flavor.clone(),
            desc: source.desc.clone(),
            spells: source
                .spells
                .iter()
                .map(|s| SubclassSpell {
                    prerequisites: self.reference.map_all(&s.prerequisites),
                    spell: self.reference.map(&s.spell),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
    choice: ChoiceApiMapper,
}

impl Mapper<FeatureDto, Feature> for FeatureApiMapper {
    fn map(&self, source: &FeatureDto) -> Feature {
        Feature {
            base: self
                .base
                .map(&source.base)
                .with_resource_type(ResourceType::Features),
            level: source.level,
            class: self.reference.map(&source.class),
            subclass: self.reference.map_option(source.subclass.as_ref()),
            parent: self.reference.map_option(source.parent.as_ref()),
            desc: source.desc.clone(),
            prerequisites: source
                .prerequisites
                .iter()
                .map(|p| match p {
                    FeaturePrerequisiteDto::Level { level } => {
                        FeaturePrerequisite::Level { level: *level }
                    }
                    FeaturePrerequisiteDto::Feature { feature } => FeaturePrerequisite::Feature {
                        feature: feature.clone(),
                    },
                    FeaturePrerequisiteDto::Spell { spell } => FeaturePrerequisite::Spell {
                        spell: spell.clone(),
                    },
                })
                .collect(),
            feature_specific: source.feature_specific.as_ref().map(|f| FeatureSpecific {
                subfeature_options: self.choice.map_option(f.subfeature_options.as_ref()),
                expertise_options: self.choice.map_option(f.expertise_options.as_ref()),
                invocations: self.reference.map_all(&f.invocations),
            }),
        }
    }
}

/// Class levels carry no name in the API; the mapper synthesizes one.
///
/// The per-class `class_specific` block (rage count, ki points, ...) is not mapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassLevelApiMapper {
    base: BaseResourceApiMapper,
    reference: ResourceReferenceApiMapper,
}

impl Mapper<ClassLevelDto, ClassLevel> for ClassLevelApiMapper {
    fn map(&self, source: &ClassLevelDto) -> ClassLevel {
        let mut base = self
            .base
            .map(&source.base)
            .with_resource_type(ResourceType::ClassLevels);
        if base.name.is_empty() {
            base.name = format!("{} {}", source.class.name, source.level);
        }

        ClassLevel {
            base,
            level: source.level,
            ability_score_bonuses: source.ability_score_bonuses,
            prof_bonus: source.prof_bonus,
            features: self.reference.map_all(&source.features),
            class: self.reference.map(&source.class),
            subclass: self.reference.map_option(source.subclass.as_ref()),
            spellcasting: source.spellcasting.as_ref().map(|s| LevelSpellcasting {
                cantrips_known: s.cantrips_known,
                spells_known: s.spells_known,
                spell_slots: s.spell_slots().to_vec(),
            }),
        }
    }
}
