use charsmith_domain::Choice;
use serde::{Deserialize, Serialize};

use super::base::{BaseResourceRecord, ResourceReferenceRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    #[serde(default)]
    pub races: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub subraces: Vec<ResourceReferenceRecord>,
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub proficiencies: Vec<ResourceReferenceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency_choices: Option<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Choice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceReferenceRecord>,
}
