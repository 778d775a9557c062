use serde::{Deserialize, Serialize};

use super::resource_reference::ResourceReference;

/// A fixed increase to one ability score (e.g. +2 DEX for elves).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityBonus {
    pub ability_score: ResourceReference,
    pub bonus: i32,
}
