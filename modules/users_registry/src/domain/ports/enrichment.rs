use std::fmt;

use async_trait::async_trait;

use crate::contract::model::Gender;
use crate::domain::error::DomainError;

/// One of the three name-inference lookups performed on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lookup {
    Age,
    Gender,
    Nationality,
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Lookup::Age => "age",
            Lookup::Gender => "gender",
            Lookup::Nationality => "nationality",
        })
    }
}

/// Attributes inferred from a first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrichment {
    pub age: i32,
    pub gender: Gender,
    /// Two-letter country code, the first entry of the ranked list.
    pub nationality: String,
}

/// Transport-agnostic port that infers age, gender and nationality for a name.
///
/// Implementations fail with `DomainError::Enrichment` when any lookup fails;
/// a partial result is never returned.
#[async_trait]
pub trait EnrichmentPort: Send + Sync {
    async fn enrich(&self, name: &str) -> Result<Enrichment, DomainError>;
}
