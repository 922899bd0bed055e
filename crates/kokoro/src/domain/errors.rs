//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} ({key})")]
    NotFound { entity_type: String, key: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>, K: std::fmt::Display>(entity_type: T, key: K) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            key: key.to_string(),
        }
    }
}
