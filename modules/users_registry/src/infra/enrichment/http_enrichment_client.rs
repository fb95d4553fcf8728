use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, Instrument, Level};
use url::Url;

use crate::contract::model::Gender;
use crate::domain::error::DomainError;
use crate::domain::ports::{Enrichment, EnrichmentPort, Lookup};
use crate::infra::enrichment::wire::{
    AgifyResponse, EnrichmentFailure, GenderizeResponse, NationalizeResponse,
};

/// Base URLs of the three inference services.
#[derive(Debug, Clone)]
pub struct EnrichmentEndpoints {
    pub agify: Url,
    pub genderize: Url,
    pub nationalize: Url,
}

/// HTTP adapter implementing the EnrichmentPort.
/// Every request carries its own timeout; there are no retries.
pub struct HttpEnrichmentClient {
    client: reqwest::Client,
    endpoints: EnrichmentEndpoints,
    timeout: Duration,
}

impl HttpEnrichmentClient {
    pub fn new(client: reqwest::Client, endpoints: EnrichmentEndpoints, timeout: Duration) -> Self {
        Self {
            client,
            endpoints,
            timeout,
        }
    }

    async fn lookup<T: DeserializeOwned>(
        &self,
        lookup: Lookup,
        base: &Url,
        name: &str,
    ) -> Result<T, DomainError> {
        let mut url = base.clone();
        url.query_pairs_mut().append_pair("name", name);

        let span = tracing::span!(
            Level::INFO, "outgoing_http",
            http.method = "GET",
            http.url = %url,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
        );

        self.fetch(url)
            .instrument(span)
            .await
            .map_err(|failure| DomainError::enrichment(lookup, failure.to_string()))
    }

    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, EnrichmentFailure> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        tracing::Span::current().record("http.status_code", status.as_u16());
        if !status.is_success() {
            return Err(EnrichmentFailure::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                EnrichmentFailure::Timeout
            } else {
                EnrichmentFailure::Decode(e.to_string())
            }
        })
    }

    async fn age(&self, name: &str) -> Result<i32, DomainError> {
        let body: AgifyResponse = self.lookup(Lookup::Age, &self.endpoints.agify, name).await?;
        body.into_age()
            .map_err(|f| DomainError::enrichment(Lookup::Age, f.to_string()))
    }

    async fn gender(&self, name: &str) -> Result<Gender, DomainError> {
        let body: GenderizeResponse = self
            .lookup(Lookup::Gender, &self.endpoints.genderize, name)
            .await?;
        body.into_gender()
            .map_err(|f| DomainError::enrichment(Lookup::Gender, f.to_string()))
    }

    async fn nationality(&self, name: &str) -> Result<String, DomainError> {
        let body: NationalizeResponse = self
            .lookup(Lookup::Nationality, &self.endpoints.nationalize, name)
            .await?;
        body.into_nationality()
            .map_err(|f| DomainError::enrichment(Lookup::Nationality, f.to_string()))
    }
}

fn classify(e: reqwest::Error) -> EnrichmentFailure {
    if e.is_timeout() {
        EnrichmentFailure::Timeout
    } else {
        EnrichmentFailure::Transport(e.to_string())
    }
}

#[async_trait]
impl EnrichmentPort for HttpEnrichmentClient {
    #[instrument(
        name = "users_registry.http.enrichment.enrich",
        skip_all,
        fields(name = %name)
    )]
    async fn enrich(&self, name: &str) -> Result<Enrichment, DomainError> {
        // Independent lookups; the first failure cancels the others.
        let (age, gender, nationality) =
            tokio::try_join!(self.age(name), self.gender(name), self.nationality(name))?;
        debug!(age, %gender, %nationality, "Name enrichment resolved");
        Ok(Enrichment {
            age,
            gender,
            nationality,
        })
    }
}
