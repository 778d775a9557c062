use serde::{Deserialize, Serialize};

/// A named link to another resource, resolved on demand through a repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceReference {
    pub id: String,
    pub name: String,
}

impl ResourceReference {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
