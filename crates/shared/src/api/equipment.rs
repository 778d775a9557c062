use serde::{Deserialize, Serialize};

use super::common::{ApiBaseDto, ApiReferenceDto, CostDto, DamageDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeDto {
    pub normal: u32,
    #[serde(default)]
    pub long: Option<u32>,
}

/// `GET /api/equipment/{index}` for an item in the weapon category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub equipment_category: ApiReferenceDto,
    pub weapon_category: String,
    pub weapon_range: String,
    #[serde(default)]
    pub category_range: String,
    pub cost: CostDto,
    #[serde(default)]
    pub damage: Option<DamageDto>,
    #[serde(default)]
    pub two_handed_damage: Option<DamageDto>,
    pub range: RangeDto,
    #[serde(default)]
    pub throw_range: Option<RangeDto>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub properties: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub desc: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorClassDto {
    pub base: i32,
    pub dex_bonus: bool,
    #[serde(default)]
    pub max_bonus: Option<i32>,
}

/// `GET /api/equipment/{index}` for an item in the armor category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub equipment_category: ApiReferenceDto,
    pub armor_category: String,
    pub armor_class: ArmorClassDto,
    #[serde(default)]
    pub str_minimum: u32,
    #[serde(default)]
    pub stealth_disadvantage: bool,
    #[serde(default)]
    pub weight: Option<f32>,
    pub cost: CostDto,
}

/// `GET /api/equipment-categories/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentCategoryDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    #[serde(default)]
    pub equipment: Vec<ApiReferenceDto>,
}
