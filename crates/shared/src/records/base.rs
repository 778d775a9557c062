//! Common record envelope and the versioned resource type field.

use charsmith_domain::ResourceType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Schema version written by this build. Records below it are upgraded at load.
pub const CURRENT_RECORD_VERSION: u32 = 2;

/// `resourceType` as it appears in storage.
///
/// Version 2 records store the [`ResourceType`] ordinal. Version 0 and 1
/// records stored the API path string (`"races"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredResourceType {
    Current(ResourceType),
    Legacy(String),
}

impl StoredResourceType {
    /// The typed value, parsing the legacy string form when needed.
    pub fn resolve(&self) -> Option<ResourceType> {
        match self {
            Self::Current(resource_type) => Some(*resource_type),
            Self::Legacy(path) => path.parse().ok(),
        }
    }
}

impl From<ResourceType> for StoredResourceType {
    fn from(value: ResourceType) -> Self {
        Self::Current(value)
    }
}

/// Fields shared by every homebrew record under `homebrew_{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResourceRecord {
    /// Absent on records written before versioning existed
    #[serde(default)]
    pub version: u32,
    pub id: Uuid,
    pub name: String,
    pub resource_type: StoredResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BaseResourceRecord {
    pub fn new(id: Uuid, name: impl Into<String>, resource_type: ResourceType) -> Self {
        Self {
            version: CURRENT_RECORD_VERSION,
            id,
            name: name.into(),
            resource_type: StoredResourceType::Current(resource_type),
            notes: None,
        }
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.resource_type.resolve()
    }
}

/// Any stored homebrew record, seen through its common envelope.
pub trait HomebrewRecord {
    fn base(&self) -> &BaseResourceRecord;
}

impl HomebrewRecord for BaseResourceRecord {
    fn base(&self) -> &BaseResourceRecord {
        self
    }
}

/// Cross-reference inside a record. Points at an SRD slug or a homebrew UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReferenceRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbilityBonusRecord {
    pub ability_score: ResourceReferenceRecord,
    pub bonus: i32,
}
