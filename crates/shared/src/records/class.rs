//! Class-side records: class, subclass, class level and feature.

use charsmith_domain::{Choice, FeaturePrerequisite};
use serde::{Deserialize, Serialize};

use super::base::{BaseResourceRecord, ResourceReferenceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub hit_die: u8,
    #[serde(default)]
    pub proficiency_choices: Vec<Choice>,
    #[serde(default)]
    pub proficiencies: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub saving_throws: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub starting_equipment: Vec<StartingEquipmentRecord>,
    #[serde(default)]
    pub starting_equipment_options: Vec<Choice>,
    #[serde(default)]
    pub subclasses: Vec<ResourceReferenceRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingEquipmentRecord {
    pub equipment: ResourceReferenceRecord,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubclassRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub class: ResourceReferenceRecord,
    #[serde(default)]
    pub subclass_flavor: String,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub spells: Vec<SubclassSpellRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassSpellRecord {
    #[serde(default)]
    pub prerequisites: Vec<ResourceReferenceRecord>,
    pub spell: ResourceReferenceRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevelRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_score_bonuses: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prof_bonus: Option<u8>,
    #[serde(default)]
    pub features: Vec<ResourceReferenceRecord>,
    pub class: ResourceReferenceRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<ResourceReferenceRecord>,
    /// Slots per spell level, index 0 is level 1
    #[serde(default)]
    pub spell_slots: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantrips_known: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spells_known: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub level: u8,
    pub class: ResourceReferenceRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subclass: Option<ResourceReferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceReferenceRecord>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub prerequisites: Vec<FeaturePrerequisite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfeature_options: Option<Choice>,
}
