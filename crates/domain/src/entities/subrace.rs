use serde::{Deserialize, Serialize};

use super::ability_bonus::AbilityBonus;
use super::base_resource::{BaseResource, HasBaseResource};
use super::choice::Choice;
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subrace {
    #[serde(flatten)]
    pub base: BaseResource,
    pub race: ResourceReference,
    pub desc: String,
    pub ability_bonuses: Vec<AbilityBonus>,
    pub starting_proficiencies: Vec<ResourceReference>,
    pub languages: Vec<ResourceReference>,
    pub language_options: Option<Choice>,
    pub racial_traits: Vec<ResourceReference>,
}

impl HasBaseResource for Subrace {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
