use serde::{Deserialize, Serialize};

use super::choice::ChoiceDto;
use super::common::{AbilityBonusDto, ApiBaseDto, ApiReferenceDto};

/// `GET /api/races/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub speed: u32,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusDto>,
    #[serde(default)]
    pub ability_bonus_options: Option<ChoiceDto>,
    #[serde(default)]
    pub alignment: String,
    #[serde(default)]
    pub age: String,
    pub size: String,
    #[serde(default)]
    pub size_description: String,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub starting_proficiency_options: Option<ChoiceDto>,
    #[serde(default)]
    pub languages: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub language_options: Option<ChoiceDto>,
    #[serde(default)]
    pub language_desc: String,
    #[serde(default)]
    pub traits: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub subraces: Vec<ApiReferenceDto>,
}

/// `GET /api/subraces/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubraceDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    pub race: ApiReferenceDto,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub ability_bonuses: Vec<AbilityBonusDto>,
    #[serde(default)]
    pub starting_proficiencies: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub languages: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub language_options: Option<ChoiceDto>,
    #[serde(default)]
    pub racial_traits: Vec<ApiReferenceDto>,
}
