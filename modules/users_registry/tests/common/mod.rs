//! Shared fixtures: in-memory SQLite with migrations and a scripted enrichment port.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use users_registry::config::UsersRegistryConfig;
use users_registry::contract::model::Gender;
use users_registry::domain::error::DomainError;
use users_registry::domain::ports::{Enrichment, EnrichmentPort, Lookup};
use users_registry::infra::storage::{migrations::Migrator, SeaOrmUsersRepository};
use users_registry::UsersRegistry;

/// Create a fresh test database (in-memory SQLite) and run migrations.
pub async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Enrichment port that answers from a fixed script and counts calls.
pub struct StubEnrichment {
    outcome: Result<Enrichment, (Lookup, String)>,
    pub calls: AtomicUsize,
}

impl StubEnrichment {
    pub fn ok(age: i32, gender: Gender, nationality: &str) -> Self {
        Self {
            outcome: Ok(Enrichment {
                age,
                gender,
                nationality: nationality.to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(lookup: Lookup, message: &str) -> Self {
        Self {
            outcome: Err((lookup, message.to_string())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl EnrichmentPort for StubEnrichment {
    async fn enrich(&self, _name: &str) -> Result<Enrichment, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(e) => Ok(e.clone()),
            Err((lookup, message)) => Err(DomainError::enrichment(*lookup, message.clone())),
        }
    }
}

/// Module wired to a fresh database and the given enrichment stub.
pub async fn registry_with(enrichment: Arc<StubEnrichment>) -> UsersRegistry {
    let db = create_test_db().await;
    let repo = SeaOrmUsersRepository::new(db);
    UsersRegistry::from_parts(Arc::new(repo), enrichment, &UsersRegistryConfig::default())
}

/// Ivan, 23, male, RU.
pub fn ivan_enrichment() -> Arc<StubEnrichment> {
    Arc::new(StubEnrichment::ok(23, Gender::Male, "RU"))
}
