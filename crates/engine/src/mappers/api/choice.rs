//! Recursive mapping of the tagged option union.

use charsmith_domain::{
    ActionCount, Choice, ChoiceOption, DifficultyClass, OptionPrerequisite, OptionSet,
};
use charsmith_shared::api::{
    ActionCountDto, ChoiceDto, DifficultyClassDto, OptionDto, OptionPrerequisiteDto, OptionSetDto,
};

use super::common::ResourceReferenceApiMapper;
use crate::mappers::Mapper;

/// Maps a choice and every option beneath it, preserving each option's kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChoiceApiMapper {
    reference: ResourceReferenceApiMapper,
}

impl ChoiceApiMapper {
    pub fn new(reference: ResourceReferenceApiMapper) -> Self {
        Self { reference }
    }

    fn map_option_set(&self, source: &OptionSetDto) -> OptionSet {
        match source {
            OptionSetDto::OptionsArray { options } => OptionSet::OptionsArray {
                options: options.iter().map(|o| self.map_choice_option(o)).collect(),
            },
            OptionSetDto::EquipmentCategory { equipment_category } => {
                OptionSet::EquipmentCategory {
                    equipment_category: self.reference.map(equipment_category),
                }
            }
            OptionSetDto::ResourceList { resource_list_url } => OptionSet::ResourceList {
                resource_list_url: resource_list_url.clone(),
            },
        }
    }

    fn map_choice_option(&self, source: &OptionDto) -> ChoiceOption {
        match source {
            OptionDto::Reference { item } => ChoiceOption::Reference {
                item: self.reference.map(item),
            },
            OptionDto::Action {
                action_name,
                count,
                action_type,
                notes,
            } => ChoiceOption::Action {
                action_name: action_name.clone(),
                count: match count {
                    ActionCountDto::Number(n) => ActionCount::Fixed(*n),
                    ActionCountDto::Text(text) => ActionCount::Expression(text.clone()),
                },
                action_type: action_type.clone(),
                notes: notes.clone(),
            },
            OptionDto::Multiple { items } => ChoiceOption::Multiple {
                items: items.iter().map(|o| self.map_choice_option(o)).collect(),
            },
            OptionDto::Choice { choice } => ChoiceOption::Choice {
                choice: Box::new(self.map(choice.as_ref())),
            },
            OptionDto::String { string } => ChoiceOption::String {
                string: string.clone(),
            },
            OptionDto::Ideal { desc, alignments } => ChoiceOption::Ideal {
                desc: desc.clone(),
                alignments: self.reference.map_all(alignments),
            },
            OptionDto::CountedReference {
                count,
                of,
                prerequisites,
            } => ChoiceOption::CountedReference {
                count: *count,
                of: self.reference.map(of),
                prerequisites: prerequisites
                    .iter()
                    .map(|p| match p {
                        OptionPrerequisiteDto::Proficiency { proficiency } => {
                            OptionPrerequisite::Proficiency {
                                proficiency: self.reference.map(proficiency),
                            }
                        }
                    })
                    .collect(),
            },
            OptionDto::ScorePrerequisite {
                ability_score,
                minimum_score,
            } => ChoiceOption::ScorePrerequisite {
                ability_score: self.reference.map(ability_score),
                minimum_score: *minimum_score,
            },
            OptionDto::AbilityBonus {
                ability_score,
                bonus,
            } => ChoiceOption::AbilityBonus {
                ability_score: self.reference.map(ability_score),
                bonus: *bonus,
            },
            OptionDto::Breath { name, dc, damage } => ChoiceOption::Breath {
                name: name.clone(),
                dc: self.map_dc(dc),
                damage: self.reference.map_all(damage),
            },
            OptionDto::Damage {
                damage_type,
                damage_dice,
                notes,
            } => ChoiceOption::Damage {
                damage_type: self.reference.map(damage_type),
                damage_dice: damage_dice.clone(),
                notes: notes.clone(),
            },
        }
    }

    fn map_dc(&self, source: &DifficultyClassDto) -> DifficultyClass {
        DifficultyClass {
            dc_type: self.reference.map(&source.dc_type),
            dc_value: source.dc_value,
            success_type: source.success_type.clone(),
        }
    }
}

impl Mapper<ChoiceDto, Choice> for ChoiceApiMapper {
    fn map(&self, source: &ChoiceDto) -> Choice {
        Choice {
            desc: source.desc.clone(),
            choose: source.choose,
            choice_type: source.choice_type.clone(),
            from: self.map_option_set(&source.from),
        }
    }
}
