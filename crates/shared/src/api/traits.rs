use serde::{Deserialize, Serialize};

use super::choice::ChoiceDto;
use super::common::{ApiBaseDto, ApiReferenceDto};

/// `GET /api/traits/{index}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    #[serde(default)]
    pub races: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub subraces: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub proficiencies: Vec<ApiReferenceDto>,
    #[serde(default)]
    pub proficiency_choices: Option<ChoiceDto>,
    #[serde(default)]
    pub language_options: Option<ChoiceDto>,
    #[serde(default)]
    pub parent: Option<ApiReferenceDto>,
    #[serde(default)]
    pub trait_specific: Option<TraitSpecificDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitSpecificDto {
    #[serde(default)]
    pub subtrait_options: Option<ChoiceDto>,
    #[serde(default)]
    pub spell_options: Option<ChoiceDto>,
    #[serde(default)]
    pub damage_type: Option<ApiReferenceDto>,
}
