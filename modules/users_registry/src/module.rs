use std::sync::Arc;

use anyhow::Context;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{debug, info};
use url::Url;

use crate::api::rest::{openapi::UsersRegistryApiDoc, routes};
use crate::config::UsersRegistryConfig;
use crate::contract::client::UsersRegistryApi;
use crate::domain::ports::EnrichmentPort;
use crate::domain::repo::UsersRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::UsersRegistryLocalClient;
use crate::infra::enrichment::{EnrichmentEndpoints, HttpEnrichmentClient};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::SeaOrmUsersRepository;

/// The users_registry module: domain service plus its REST surface and local client.
#[derive(Clone)]
pub struct UsersRegistry {
    service: Arc<Service>,
}

impl UsersRegistry {
    /// Wire the production adapters: SeaORM storage and the HTTP enrichment client.
    pub fn init(db: DatabaseConnection, cfg: &UsersRegistryConfig) -> anyhow::Result<Self> {
        info!("Initializing users_registry module");
        cfg.validate()?;
        debug!(
            "Loaded users_registry config: default_limit={}, max_limit={}, enrichment_timeout={:?}",
            cfg.default_limit, cfg.max_limit, cfg.enrichment.timeout
        );

        let endpoints = EnrichmentEndpoints {
            agify: parse_url("agify_url", &cfg.enrichment.agify_url)?,
            genderize: parse_url("genderize_url", &cfg.enrichment.genderize_url)?,
            nationalize: parse_url("nationalize_url", &cfg.enrichment.nationalize_url)?,
        };
        let http = reqwest::Client::builder()
            .user_agent(concat!("users-registry/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("failed to build enrichment HTTP client")?;
        let enrichment = HttpEnrichmentClient::new(http, endpoints, cfg.enrichment.timeout);

        let repo = SeaOrmUsersRepository::new(db);
        Ok(Self::from_parts(Arc::new(repo), Arc::new(enrichment), cfg))
    }

    /// Wire arbitrary port implementations.
    pub fn from_parts(
        repo: Arc<dyn UsersRepository>,
        enrichment: Arc<dyn EnrichmentPort>,
        cfg: &UsersRegistryConfig,
    ) -> Self {
        let service_config = ServiceConfig {
            default_limit: cfg.default_limit,
            max_limit: cfg.max_limit,
        };
        Self {
            service: Arc::new(Service::new(repo, enrichment, service_config)),
        }
    }

    /// Apply pending migrations.
    pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running users_registry database migrations");
        Migrator::up(db, None)
            .await
            .context("users_registry migrations failed")?;
        info!("Users database migrations completed successfully");
        Ok(())
    }

    /// Revert the most recently applied migration.
    pub async fn rollback(db: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Reverting last users_registry migration");
        Migrator::down(db, Some(1))
            .await
            .context("users_registry rollback failed")?;
        Ok(())
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// In-process client for other modules.
    pub fn client(&self) -> Arc<dyn UsersRegistryApi> {
        Arc::new(UsersRegistryLocalClient::new(self.service.clone()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering users_registry REST routes");
        routes::register_routes(router, self.service.clone())
    }

    pub fn openapi() -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        UsersRegistryApiDoc::openapi()
    }
}

fn parse_url(key: &str, raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw).with_context(|| format!("users_registry.enrichment.{key} is not a valid URL: {raw}"))
}
