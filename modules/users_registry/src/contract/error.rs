use thiserror::Error;

use crate::contract::model::UserId;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsersRegistryError {
    #[error("User not found: {id}")]
    NotFound { id: UserId },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Enrichment unavailable: {message}")]
    EnrichmentUnavailable { message: String },

    #[error("Internal error")]
    Internal,
}

impl UsersRegistryError {
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn enrichment_unavailable(message: impl Into<String>) -> Self {
        Self::EnrichmentUnavailable {
            message: message.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for UsersRegistryError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError;
        match domain_error {
            DomainError::UserNotFound { id } => Self::not_found(id),
            e @ DomainError::Validation { .. } => Self::validation(e.to_string()),
            e @ DomainError::Enrichment { .. } => Self::enrichment_unavailable(e.to_string()),
            DomainError::Database { .. } => Self::internal(),
        }
    }
}
