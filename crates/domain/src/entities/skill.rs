use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(flatten)]
    pub base: BaseResource,
    pub desc: Vec<String>,
    /// Governing ability, e.g. `dex` for Stealth
    pub ability_score: ResourceReference,
}

impl HasBaseResource for Skill {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
