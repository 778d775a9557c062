use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::choice::Choice;
use super::resource_reference::ResourceReference;

/// A class or subclass feature gained at a given level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(flatten)]
    pub base: BaseResource,
    pub level: u8,
    pub class: ResourceReference,
    pub subclass: Option<ResourceReference>,
    pub parent: Option<ResourceReference>,
    pub desc: Vec<String>,
    pub prerequisites: Vec<FeaturePrerequisite>,
    pub feature_specific: Option<FeatureSpecific>,
}

impl HasBaseResource for Feature {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeaturePrerequisite {
    Level { level: u8 },
    Feature { feature: String },
    Spell { spell: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureSpecific {
    pub subfeature_options: Option<Choice>,
    pub expertise_options: Option<Choice>,
    pub invocations: Vec<ResourceReference>,
}
