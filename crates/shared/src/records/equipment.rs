use charsmith_domain::{ArmorClass, Cost, Damage, WeaponRange};
use serde::{Deserialize, Serialize};

use super::base::{BaseResourceRecord, ResourceReferenceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaponRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub weapon_category: String,
    pub weapon_range: String,
    pub cost: Cost,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<Damage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_handed_damage: Option<Damage>,
    pub range: WeaponRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_range: Option<WeaponRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default)]
    pub properties: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub desc: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    pub armor_category: String,
    pub armor_class: ArmorClass,
    #[serde(default)]
    pub str_minimum: u32,
    #[serde(default)]
    pub stealth_disadvantage: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    pub cost: Cost,
}
