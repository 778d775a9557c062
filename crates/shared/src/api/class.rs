//! Class, subclass, class level and feature payloads.

use serde::{Deserialize, Serialize};

use super::choice::ChoiceDto;
use super::common::{ApiBaseDto, ApiReferenceDto};

/// `GET /api/classes/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub hit_die: u8,
    #[serde(default)]
    pub proficiency_choices: Vec<ChoiceDto>,
    #[serde(default)]
    pub proficiencies: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub saving_throws: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub starting_equipment: Vec<StartingEquipmentDto>,
    #[serde(default)]
    pub starting_equipment_options: Vec<ChoiceDto>,
    #[serde(default)]
    pub class_levels: Option<String>,
    #[serde(default)]
    pub subclasses: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub spellcasting: Option<SpellcastingDto>,
    #[serde(default)]
    pub multi_classing: Option<MulticlassingDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingEquipmentDto {
    pub equipment: ApiReferenceDto,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingDto {
    pub level: u8,
    pub spellcasting_ability: ApiReferenceDto,
    #[serde(default)]
    pub info: Vec<SpellcastingInfoDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingInfoDto {
    pub name: String,
    #[serde(default)]
    pub desc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MulticlassingDto {
    #[serde(default)]
    pub prerequisites: Vec<AbilityPrerequisiteDto>,
    #[serde(default)]
    pub prerequisite_options: Option<ChoiceDto>,
    #[serde(default)]
    pub proficiencies: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub proficiency_choices: Vec<ChoiceDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityPrerequisiteDto {
    pub ability_score: ApiReferenceDto,
    pub minimum_score: u32,
}

/// `GET /api/subclasses/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub class: ApiReferenceDto,
    #[serde(default)]
    pub subclass_flavor: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub subclass_levels: Option<String>,
    #[serde(default)]
    pub spells: Vec<SubclassSpellDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassSpellDto {
    #[serde(default)]
    pub prerequisites: Vec<ApiReferenceDto>,
    pub spell: ApiReferenceDto,
}

/// One entry of `GET /api/classes/{class}/levels`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassLevelDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub level: u8,
    #[serde(default)]
    pub ability_score_bonuses: Option<u8>,
    #[serde(default)]
    pub prof_bonus: Option<u8>,
    #[serde(default)]
    pub features: Vec<ApiReferenceDto>,
    pub class: ApiReferenceDto,
    #[serde(default)]
    pub subclass: Option<ApiReferenceDto>,
    #[serde(default)]
    pub spellcasting: Option<LevelSpellcastingDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpellcastingDto {
    #[serde(default)]
    pub cantrips_known: Option<u8>,
    #[serde(default)]
    pub spells_known: Option<u8>,
    #[serde(default)]
    pub spell_slots_level_1: u8,
    #[serde(default)]
    pub spell_slots_level_2: u8,
    #[serde(default)]
    pub spell_slots_level_3: u8,
    #[serde(default)]
    pub spell_slots_level_4: u8,
    #[serde(default)]
    pub spell_slots_level_5: u8,
    #[serde(default)]
    pub spell_slots_level_6: u8,
    #[serde(default)]
    pub spell_slots_level_7: u8,
    #[serde(default)]
    pub spell_slots_level_8: u8,
    #[serde(default)]
    pub spell_slots_level_9: u8,
}

impl LevelSpellcastingDto {
    pub fn spell_slots(&self) -> [u8; 9] {
        [
            self.spell_slots_level_1,
            self.spell_slots_level_2,
            self.spell_slots_level_3,
            self.spell_slots_level_4,
            self.spell_slots_level_5,
            self.spell_slots_level_6,
            self.spell_slots_level_7,
            self.spell_slots_level_8,
            self.spell_slots_level_9,
        ]
    }
}

/// `GET /api/features/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub level: u8,
    pub class: ApiReferenceDto,
    #[serde(default)]
    pub subclass: Option<ApiReferenceDto>,
    #[serde(default)]
    pub parent: Option<ApiReferenceDto>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<FeaturePrerequisiteDto>,
    #[serde(default)]
    pub feature_specific: Option<FeatureSpecificDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeaturePrerequisiteDto {
    Level { level: u8 },
    Feature { feature: String },
    Spell { spell: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSpecificDto {
    #[serde(default)]
    pub subfeature_options: Option<ChoiceDto>,
    #[serde(default)]
    pub expertise_options: Option<ChoiceDto>,
    #[serde(default)]
    pub invocations: Vec<ApiReferenceDto>,
}
