//! The API's `Choice` / `OptionSet` / `Option` shapes.
//!
//! `option_set_type` and `option_type` are the discriminators; serde's
//! internal tagging turns them into closed enums.

use serde::{Deserialize, Serialize};

use super::common::{ApiReferenceDto, DamageDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceDto {
    #[serde(default)]
    pub desc: Option<String>,
    pub choose: u32,
    #[serde(rename = "type")]
    pub choice_type: String,
    pub from: OptionSetDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option_set_type", rename_all = "snake_case")]
pub enum OptionSetDto {
    OptionsArray {
        #[serde(default)]
        options: Vec<OptionDto>,
    },
    EquipmentCategory {
        equipment_category: ApiReferenceDto,
    },
    ResourceList {
        resource_list_url: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "option_type", rename_all = "snake_case")]
pub enum OptionDto {
    Reference {
        item: ApiReferenceDto,
    },
    Action {
        action_name: String,
        count: ActionCountDto,
        #[serde(rename = "type")]
        action_type: String,
        #[serde(default)]
        notes: Option<String>,
    },
    Multiple {
        items: Vec<OptionDto>,
    },
    Choice {
        choice: Box<ChoiceDto>,
    },
    String {
        string: String,
    },
    Ideal {
        desc: String,
        alignments: Vec<ApiReferenceDto>,
    },
    CountedReference {
        count: u32,
        of: ApiReferenceDto,
        #[serde(default)]
        prerequisites: Vec<OptionPrerequisiteDto>,
    },
    ScorePrerequisite {
        ability_score: ApiReferenceDto,
        minimum_score: u32,
    },
    AbilityBonus {
        ability_score: ApiReferenceDto,
        bonus: i32,
    },
    Breath {
        name: String,
        dc: DifficultyClassDto,
        #[serde(default)]
        damage: Vec<DamageDto>,
    },
    Damage {
        damage_type: ApiReferenceDto,
        damage_dice: String,
        #[serde(default)]
        notes: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionCountDto {
    Number(u32),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionPrerequisiteDto {
    Proficiency { proficiency: ApiReferenceDto },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyClassDto {
    pub dc_type: ApiReferenceDto,
    #[serde(default)]
    pub dc_value: Option<u32>,
    pub success_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_choice() {
        let json = r#"{
            "choose": 1,
            "type": "languages",
            "from": {
                "option_set_type": "options_array",
                "options": [
                    {"option_type": "reference", "item": {"index": "dwarvish", "name": "Dwarvish", "url": "/api/languages/dwarvish"}},
                    {"option_type": "reference", "item": {"index": "elvish", "name": "Elvish", "url": "/api/languages/elvish"}}
                ]
            }
        }"#;
        let choice: ChoiceDto = serde_json::from_str(json).unwrap();
        assert_eq!(choice.choose, 1);
        match choice.from {
            OptionSetDto::OptionsArray { options } => assert_eq!(options.len(), 2),
            other => panic!("unexpected option set: {:?}", other),
        }
    }

    #[test]
    fn parses_equipment_category_set() {
        let json = r#"{
            "desc": "a martial weapon",
            "choose": 1,
            "type": "equipment",
            "from": {
                "option_set_type": "equipment_category",
                "equipment_category": {"index": "martial-weapons", "name": "Martial Weapons", "url": "/api/equipment-categories/martial-weapons"}
            }
        }"#;
        let choice: ChoiceDto = serde_json::from_str(json).unwrap();
        assert!(matches!(choice.from, OptionSetDto::EquipmentCategory { .. }));
    }

    #[test]
    fn parses_action_count_as_number_or_text() {
        let json = r#"{"option_type": "action", "action_name": "Bite", "count": "1d4", "type": "melee"}"#;
        let option: OptionDto = serde_json::from_str(json).unwrap();
        assert_eq!(
            option,
            OptionDto::Action {
                action_name: "Bite".into(),
                count: ActionCountDto::Text("1d4".into()),
                action_type: "melee".into(),
                notes: None,
            }
        );
    }

    #[test]
    fn rejects_unknown_option_type() {
        let json = r#"{"option_type": "teleport", "item": {"index": "x", "name": "X"}}"#;
        assert!(serde_json::from_str::<OptionDto>(json).is_err());
    }
}
