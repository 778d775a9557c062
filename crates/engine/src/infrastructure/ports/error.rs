//! Error types for port operations.

use charsmith_shared::records::StoredResourceType;

/// Local key-value storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Stored value could not be (de)serialized.
    #[error("Serialization error for key {key}: {message}")]
    Serialization { key: String, message: String },

    /// Underlying store could not be read or written.
    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl StorageError {
    pub fn serialization(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Serialization {
            key: key.into(),
            message: message.to_string(),
        }
    }

    pub fn io(message: impl ToString) -> Self {
        Self::Io(message.to_string())
    }
}

/// Reference API failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, connect, timeout).
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// Non-success status other than 429.
    #[error("Request to {url} returned HTTP {status}")]
    Status { status: u16, url: String },

    /// Still rate limited after the last retry.
    #[error("Too many retries for {url} after {attempts} attempts")]
    TooManyRetries { attempts: u32, url: String },

    /// Body was not the expected JSON shape.
    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },
}

impl ApiError {
    pub fn transport(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_response(url: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidResponse {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Check if the API answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Schema migration failures. Fatal for the record being upgraded.
#[derive(Debug, thiserror::Error)]
pub enum UpgradeError {
    #[error("Unknown resource type '{0}' in stored record")]
    UnknownResourceType(String),

    #[error("Stored version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("Malformed stored value under {key}: {message}")]
    Malformed { key: String, message: String },
}

impl UpgradeError {
    pub fn malformed(key: impl Into<String>, message: impl ToString) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.to_string(),
        }
    }

    /// Error for a `resourceType` value no version knows about.
    pub fn unknown_resource_type(stored: &StoredResourceType) -> Self {
        match stored {
            StoredResourceType::Legacy(text) => Self::UnknownResourceType(text.clone()),
            StoredResourceType::Current(resource_type) => {
                Self::UnknownResourceType(resource_type.to_string())
            }
        }
    }
}

/// Repository operation errors.
///
/// Absence is never an error: lookups return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),
}

/// Bank operation errors.
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("{entity_type} not found: {id}")]
    EntryNotFound { entity_type: &'static str, id: String },

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error(transparent)]
    Domain(#[from] charsmith_domain::DomainError),
}

impl BankError {
    pub fn entry_not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::EntryNotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EntryNotFound { .. })
    }
}
