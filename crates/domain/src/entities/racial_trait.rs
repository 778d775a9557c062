use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::choice::Choice;
use super::resource_reference::ResourceReference;

/// A racial trait such as Darkvision or Fey Ancestry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trait {
    #[serde(flatten)]
    pub base: BaseResource,
    pub races: Vec<ResourceReference>,
    pub subraces: Vec<ResourceReference>,
    pub desc: Vec<String>,
    pub proficiencies: Vec<ResourceReference>,
    pub proficiency_choices: Option<Choice>,
    pub language_options: Option<Choice>,
    pub parent: Option<ResourceReference>,
    pub trait_specific: Option<TraitSpecific>,
}

impl HasBaseResource for Trait {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitSpecific {
    pub subtrait_options: Option<Choice>,
    pub spell_options: Option<Choice>,
    pub damage_type: Option<ResourceReference>,
}
