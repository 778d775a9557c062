use serde::{Deserialize, Serialize};

use super::ability_bonus::AbilityBonus;
use super::base_resource::{BaseResource, HasBaseResource};
use super::choice::Choice;
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    #[serde(flatten)]
    pub base: BaseResource,
    /// Walking speed in feet
    pub speed: u32,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub ability_bonus_options: Option<Choice>,
    pub alignment: String,
    pub age: String,
    pub size: String,
    pub size_description: String,
    pub starting_proficiencies: Vec<ResourceReference>,
    pub starting_proficiency_options: Option<Choice>,
    pub languages: Vec<ResourceReference>,
    pub language_options: Option<Choice>,
    pub language_desc: String,
    pub traits: Vec<ResourceReference>,
    pub subraces: Vec<ResourceReference>,
}

impl Race {
    /// Sum of fixed bonuses this race grants to `ability_id` (e.g. "dex").
    pub fn fixed_bonus_for(&self, ability_id: &str) -> i32 {
        self.ability_bonuses
            .iter()
            .filter(|b| b.ability_score.id == ability_id)
            .map(|b| b.bonus)
            .sum()
    }
}

impl HasBaseResource for Race {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
