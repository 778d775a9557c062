//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for enums parsed from API or storage strings)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DomainError {
    /// Creates a validation error for rule violations (e.g. an ability score out of range).
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("score must be between 1 and 30");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: score must be between 1 and 30"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("PlayerCharacter", "123e4567-e89b-12d3-a456-426614174000");
        assert!(err.to_string().contains("PlayerCharacter"));
        assert!(err.to_string().contains("123e4567"));
    }
}
