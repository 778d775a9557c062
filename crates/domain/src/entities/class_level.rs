use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::resource_reference::ResourceReference;

/// What a class grants at one level (features, proficiency bonus, slots).
///
/// SRD levels have no display name; the mapper derives one from the class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassLevel {
    #[serde(flatten)]
    pub base: BaseResource,
    pub level: u8,
    pub ability_score_bonuses: Option<u8>,
    pub prof_bonus: Option<u8>,
    pub features: Vec<ResourceReference>,
    pub class: ResourceReference,
    pub subclass: Option<ResourceReference>,
    pub spellcasting: Option<LevelSpellcasting>,
}

impl HasBaseResource for ClassLevel {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelSpellcasting {
    pub cantrips_known: Option<u8>,
    pub spells_known: Option<u8>,
    /// Slots per spell level, index 0 = 1st level
    pub spell_slots: Vec<u8>,
}
