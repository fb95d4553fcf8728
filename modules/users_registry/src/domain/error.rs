use std::fmt;

use thiserror::Error;

use crate::contract::model::UserId;
use crate::domain::ports::enrichment::Lookup;

/// A single field-level contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    #[error("Validation failed: {}", join_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },

    #[error("Enrichment failed ({lookup} lookup): {message}")]
    Enrichment { lookup: Lookup, message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl DomainError {
    pub fn user_not_found(id: UserId) -> Self {
        Self::UserNotFound { id }
    }

    pub fn invalid(violations: Vec<FieldViolation>) -> Self {
        Self::Validation { violations }
    }

    pub fn enrichment(lookup: Lookup, message: impl Into<String>) -> Self {
        Self::Enrichment {
            lookup,
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
