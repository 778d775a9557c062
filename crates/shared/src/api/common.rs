//! Building blocks reused by most API payloads.

use serde::{Deserialize, Serialize};

/// `{ index, name, url }` link to another API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiReferenceDto {
    pub index: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Response of `GET /api/{resource-type}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceListDto {
    pub count: u32,
    pub results: Vec<ApiReferenceDto>,
}

/// Identity fields present on every detail payload.
///
/// Class levels carry no `name`, so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiBaseDto {
    pub index: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<ApiReferenceDto> for ApiBaseDto {
    fn from(value: ApiReferenceDto) -> Self {
        Self {
            index: value.index,
            name: value.name,
            url: value.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityBonusDto {
    pub ability_score: ApiReferenceDto,
    pub bonus: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostDto {
    pub quantity: u32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageDto {
    pub damage_dice: String,
    pub damage_type: ApiReferenceDto,
}
