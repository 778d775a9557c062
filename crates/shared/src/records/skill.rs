use serde::{Deserialize, Serialize};

use super::base::{BaseResourceRecord, ResourceReferenceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    #[serde(flatten)]
    pub base: BaseResourceRecord,
    #[serde(default)]
    pub desc: Vec<String>,
    pub ability_score: ResourceReferenceRecord,
}
