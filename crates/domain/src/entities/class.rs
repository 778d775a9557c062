use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::choice::Choice;
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    #[serde(flatten)]
    pub base: BaseResource,
    pub hit_die: u8,
    pub proficiency_choices: Vec<Choice>,
    pub proficiencies: Vec<ResourceReference>,
    pub saving_throws: Vec<ResourceReference>,
    pub starting_equipment: Vec<StartingEquipment>,
    pub starting_equipment_options: Vec<Choice>,
    pub subclasses: Vec<ResourceReference>,
    pub spellcasting: Option<Spellcasting>,
    pub multi_classing: Option<Multiclassing>,
}

impl Class {
    pub fn has_saving_throw(&self, ability_id: &str) -> bool {
        self.saving_throws.iter().any(|s| s.id == ability_id)
    }
}

impl HasBaseResource for Class {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingEquipment {
    pub equipment: ResourceReference,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spellcasting {
    /// Class level at which spellcasting is gained
    pub level: u8,
    pub spellcasting_ability: ResourceReference,
    pub info: Vec<SpellcastingInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellcastingInfo {
    pub name: String,
    pub desc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Multiclassing {
    pub prerequisites: Vec<AbilityPrerequisite>,
    pub prerequisite_options: Option<Choice>,
    pub proficiencies: Vec<ResourceReference>,
    pub proficiency_choices: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityPrerequisite {
    pub ability_score: ResourceReference,
    pub minimum_score: u32,
}
