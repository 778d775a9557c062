//! Weapons and armor.

use serde::{Deserialize, Serialize};

use super::base_resource::{BaseResource, HasBaseResource};
use super::resource_reference::ResourceReference;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    pub damage_dice: String,
    pub damage_type: ResourceReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponRange {
    pub normal: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    #[serde(flatten)]
    pub base: BaseResource,
    pub equipment_category: ResourceReference,
    /// "Simple" or "Martial"
    pub weapon_category: String,
    /// "Melee" or "Ranged"
    pub weapon_range: String,
    pub category_range: String,
    pub cost: Cost,
    pub damage: Option<Damage>,
    pub two_handed_damage: Option<Damage>,
    pub range: WeaponRange,
    pub throw_range: Option<WeaponRange>,
    pub weight: Option<f32>,
    pub properties: Vec<ResourceReference>,
    #[serde(default)]
    pub desc: Vec<String>,
}

impl Weapon {
    pub fn has_property(&self, property_id: &str) -> bool {
        self.properties.iter().any(|p| p.id == property_id)
    }

    /// Finesse weapons may use DEX instead of STR for attack rolls.
    pub fn is_finesse(&self) -> bool {
        self.has_property("finesse")
    }
}

impl HasBaseResource for Weapon {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorClass {
    pub base: i32,
    pub dex_bonus: bool,
    pub max_bonus: Option<i32>,
}

impl ArmorClass {
    /// AC granted for a given DEX modifier.
    pub fn value_for(&self, dex_modifier: i32) -> i32 {
        if !self.dex_bonus {
            return self.base;
        }
        match self.max_bonus {
            Some(max) => self.base + dex_modifier.min(max),
            None => self.base + dex_modifier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Armor {
    #[serde(flatten)]
    pub base: BaseResource,
    pub equipment_category: ResourceReference,
    /// "Light", "Medium", "Heavy" or "Shield"
    pub armor_category: String,
    pub armor_class: ArmorClass,
    pub str_minimum: u32,
    pub stealth_disadvantage: bool,
    pub weight: Option<f32>,
    pub cost: Cost,
}

impl HasBaseResource for Armor {
    fn base(&self) -> &BaseResource {
        &self.base
    }
}
