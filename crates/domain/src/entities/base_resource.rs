//! The unifying shape shared by every ruleset object.

use serde::{Deserialize, Serialize};

use crate::types::ResourceType;

/// Common identity and provenance of a resource (race, class, skill, ...).
///
/// # Invariants
///
/// - `is_homebrew` is true iff the resource was authored locally. SRD resources
///   carry the API slug as `id`; homebrew resources carry a UUID.
/// - `url` is only ever set for SRD resources, `notes` only for homebrew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseResource {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `None` for API objects that have not been typed yet
    #[serde(default)]
    pub resource_type: Option<ResourceType>,
    #[serde(default)]
    pub is_homebrew: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BaseResource {
    /// Builds an untyped SRD resource.
    pub fn srd(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            resource_type: None,
            is_homebrew: false,
            notes: None,
        }
    }

    /// Builds a homebrew resource of the given type.
    pub fn homebrew(
        id: impl Into<String>,
        name: impl Into<String>,
        resource_type: ResourceType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            resource_type: Some(resource_type),
            is_homebrew: true,
            notes: None,
        }
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = Some(resource_type);
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Merged listing of SRD and homebrew resources (SRD entries first).
pub type ResourceList = Vec<BaseResource>;

/// Anything built on top of a [`BaseResource`].
pub trait HasBaseResource {
    fn base(&self) -> &BaseResource;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn name(&self) -> &str {
        &self.base().name
    }

    fn is_homebrew(&self) -> bool {
        self.base().is_homebrew
    }
}

impl HasBaseResource for BaseResource {
    fn base(&self) -> &BaseResource {
        self
    }
}
