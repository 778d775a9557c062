use serde::{Deserialize, Serialize};

use super::common::{ApiBaseDto, ApiReferenceDto};

/// `GET /api/skills/{index}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDto {
    #[serde(flatten)]
    pub base: ApiBaseDto,
    #[serde(default)]
    pub desc: Vec<String>,
    pub ability_score: ApiReferenceDto,
}
