//! Decisions a resource asks the player to make.
//!
//! A [`Choice`] offers an [`OptionSet`]; options form a tree because a
//! [`ChoiceOption::Multiple`] bundles several options and a
//! [`ChoiceOption::Choice`] nests a whole sub-decision. Every option variant
//! carries exactly the fields of its kind.

use serde::{Deserialize, Serialize};

use super::equipment::Damage;
use super::resource_reference::ResourceReference;

/// "Choose `choose` of the options in `from`".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub choose: u32,
    /// Category of the thing being chosen (e.g. "proficiencies", "languages")
    #[serde(rename = "type")]
    pub choice_type: String,
    pub from: OptionSet,
}

impl Choice {
    /// Options listed inline, or an empty slice for category/url backed sets.
    pub fn options(&self) -> &[ChoiceOption] {
        match &self.from {
            OptionSet::OptionsArray { options } => options,
            OptionSet::EquipmentCategory { .. } | OptionSet::ResourceList { .. } => &[],
        }
    }
}

/// Where the candidates of a choice come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "optionSetType", rename_all = "snake_case")]
pub enum OptionSet {
    OptionsArray { options: Vec<ChoiceOption> },
    #[serde(rename_all = "camelCase")]
    EquipmentCategory { equipment_category: ResourceReference },
    #[serde(rename_all = "camelCase")]
    ResourceList { resource_list_url: String },
}

/// Discriminator of [`ChoiceOption`], matching the API's `option_type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    Reference,
    Action,
    Multiple,
    Choice,
    String,
    Ideal,
    CountedReference,
    ScorePrerequisite,
    AbilityBonus,
    Breath,
    Damage,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Reference => "reference",
            Self::Action => "action",
            Self::Multiple => "multiple",
            Self::Choice => "choice",
            Self::String => "string",
            Self::Ideal => "ideal",
            Self::CountedReference => "counted_reference",
            Self::ScorePrerequisite => "score_prerequisite",
            Self::AbilityBonus => "ability_bonus",
            Self::Breath => "breath",
            Self::Damage => "damage",
        }
    }
}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "optionType", rename_all = "snake_case")]
pub enum ChoiceOption {
    Reference {
        item: ResourceReference,
    },
    #[serde(rename_all = "camelCase")]
    Action {
        action_name: String,
        count: ActionCount,
        #[serde(rename = "type")]
        action_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
    Multiple {
        items: Vec<ChoiceOption>,
    },
    Choice {
        choice: Box<Choice>,
    },
    String {
        string: String,
    },
    Ideal {
        desc: String,
        alignments: Vec<ResourceReference>,
    },
    CountedReference {
        count: u32,
        of: ResourceReference,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        prerequisites: Vec<OptionPrerequisite>,
    },
    #[serde(rename_all = "camelCase")]
    ScorePrerequisite {
        ability_score: ResourceReference,
        minimum_score: u32,
    },
    #[serde(rename_all = "camelCase")]
    AbilityBonus {
        ability_score: ResourceReference,
        bonus: i32,
    },
    Breath {
        name: String,
        dc: DifficultyClass,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        damage: Vec<Damage>,
    },
    #[serde(rename_all = "camelCase")]
    Damage {
        damage_type: ResourceReference,
        damage_dice: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
    },
}

impl ChoiceOption {
    pub fn option_type(&self) -> OptionType {
        match self {
            Self::Reference { .. } => OptionType::Reference,
            Self::Action { .. } => OptionType::Action,
            Self::Multiple { .. } => OptionType::Multiple,
            Self::Choice { .. } => OptionType::Choice,
            Self::String { .. } => OptionType::String,
            Self::Ideal { .. } => OptionType::Ideal,
            Self::CountedReference { .. } => OptionType::CountedReference,
            Self::ScorePrerequisite { .. } => OptionType::ScorePrerequisite,
            Self::AbilityBonus { .. } => OptionType::AbilityBonus,
            Self::Breath { .. } => OptionType::Breath,
            Self::Damage { .. } => OptionType::Damage,
        }
    }

    /// Every resource reference reachable from this option, depth first.
    pub fn references(&self) -> Vec<&ResourceReference> {
        let mut out = Vec::new();
        self.collect_references(&mut out);
        out
    }

    fn collect_references<'a>(&'a self, out: &mut Vec<&'a ResourceReference>) {
        match self {
            Self::Reference { item } => out.push(item),
            Self::CountedReference { of, .. } => out.push(of),
            Self::Multiple { items } => {
                for item in items {
                    item.collect_references(out);
                }
            }
            Self::Choice { choice } => {
                for option in choice.options() {
                    option.collect_references(out);
                }
            }
            Self::Ideal { alignments, .. } => out.extend(alignments.iter()),
            Self::ScorePrerequisite { ability_score, .. }
            | Self::AbilityBonus { ability_score, .. } => out.push(ability_score),
            Self::Damage { damage_type, .. } => out.push(damage_type),
            Self::Action { .. } | Self::String { .. } | Self::Breath { .. } => {}
        }
    }
}

/// Number of times an action is taken; the API uses either a number or dice text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionCount {
    Fixed(u32),
    Expression(String),
}

/// Requirement attached to a counted reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionPrerequisite {
    Proficiency { proficiency: ResourceReference },
}

/// Saving throw difficulty of a breath option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyClass {
    pub dc_type: ResourceReference,
    pub dc_value: Option<u32>,
    pub success_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(id: &str) -> ChoiceOption {
        ChoiceOption::Reference {
            item: ResourceReference::new(id, id.to_uppercase()),
        }
    }

    #[test]
    fn references_walk_nested_options() {
        let nested = Choice {
            desc: None,
            choose: 1,
            choice_type: "equipment".into(),
            from: OptionSet::OptionsArray {
                options: vec![reference("dagger")],
            },
        };
        let option = ChoiceOption::Multiple {
            items: vec![
                reference("shield"),
                ChoiceOption::Choice {
                    choice: Box::new(nested),
                },
            ],
        };

        let ids: Vec<&str> = option.references().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["shield", "dagger"]);
        assert_eq!(option.option_type(), OptionType::Multiple);
    }

    #[test]
    fn category_backed_set_has_no_inline_options() {
        let choice = Choice {
            desc: None,
            choose: 1,
            choice_type: "equipment".into(),
            from: OptionSet::EquipmentCategory {
                equipment_category: ResourceReference::new("martial-weapons", "Martial Weapons"),
            },
        };
        assert!(choice.options().is_empty());
    }

    #[test]
    fn serializes_with_option_type_tag() {
        let json = serde_json::to_value(reference("elvish")).unwrap();
        assert_eq!(json["optionType"], "reference");
        assert_eq!(json["item"]["id"], "elvish");
    }
}
