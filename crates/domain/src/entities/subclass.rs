use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subclass {
    #[serde(flatten)]
    pub base: BaseResource,
    pub class: ResourceReference,
    /// Label for the subclass family, e.g. "Primal Path"
    pub subclass_flavor: String,
    pub desc: Vec<String>,
    pub spells: Vec<SubclassSpell>,
}

impl HasBaseResource for Subclass {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

/// A spell always prepared by the subclass once its prerequisites are met.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubclassSpell {
    pub prerequisites: Vec<ResourceReference>,
    pub spell: ResourceReference,
}
