//! Response payloads of the three name-inference services and their
//! translation into enrichment values.

use serde::Deserialize;
use thiserror::Error;

use crate::contract::model::Gender;
use crate::domain::validation::{MAX_AGE, MIN_AGE};

/// Why a single lookup did not produce a usable value.
#[derive(Debug, Error)]
pub enum EnrichmentFailure {
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("no {0} known for this name")]
    Missing(&'static str),
    #[error("unsupported gender '{0}'")]
    UnsupportedGender(String),
    #[error("inferred age {0} is outside {MIN_AGE}..={MAX_AGE}")]
    AgeOutOfRange(i64),
    #[error("empty country list")]
    EmptyCountryList,
    #[error("country code '{0}' is not two letters")]
    InvalidCountryCode(String),
}

/// `GET https://api.agify.io/?name=...`
#[derive(Debug, Deserialize)]
pub struct AgifyResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub name: String,
    pub age: Option<i64>,
}

/// `GET https://api.genderize.io/?name=...`
#[derive(Debug, Deserialize)]
pub struct GenderizeResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub name: String,
    pub gender: Option<String>,
    #[serde(default)]
    pub probability: f64,
}

#[derive(Debug, Deserialize)]
pub struct CountryProbability {
    pub country_id: String,
    #[serde(default)]
    pub probability: f64,
}

/// `GET https://api.nationalize.io/?name=...`
#[derive(Debug, Deserialize)]
pub struct NationalizeResponse {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: Vec<CountryProbability>,
}

impl AgifyResponse {
    pub fn into_age(self) -> Result<i32, EnrichmentFailure> {
        let age = self.age.ok_or(EnrichmentFailure::Missing("age"))?;
        i32::try_from(age)
            .ok()
            .filter(|a| (MIN_AGE..=MAX_AGE).contains(a))
            .ok_or(EnrichmentFailure::AgeOutOfRange(age))
    }
}

impl GenderizeResponse {
    pub fn into_gender(self) -> Result<Gender, EnrichmentFailure> {
        let gender = self.gender.ok_or(EnrichmentFailure::Missing("gender"))?;
        gender
            .parse()
            .map_err(|_| EnrichmentFailure::UnsupportedGender(gender))
    }
}

impl NationalizeResponse {
    /// First country of the list; the service sorts by probability, highest first.
    pub fn into_nationality(self) -> Result<String, EnrichmentFailure> {
        let code = self
            .country
            .into_iter()
            .next()
            .map(|c| c.country_id)
            .ok_or(EnrichmentFailure::EmptyCountryList)?;
        let valid = code.chars().count() == 2 && code.chars().all(char::is_alphabetic);
        if !valid {
            return Err(EnrichmentFailure::InvalidCountryCode(code));
        }
        Ok(code)
    }
}
