//! Tests to verify that the service layer emits expected tracing spans

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing_test::traced_test;

use common::{ivan_enrichment, StubEnrichment};
use users_registry::contract::model::{Gender, NewUser, User, UserFilter, UserId, UserPatch};
use users_registry::domain::error::DomainError;
use users_registry::domain::ports::Lookup;
use users_registry::domain::query::UserQuery;
use users_registry::domain::repo::{UserRecord, UsersRepository};
use users_registry::domain::service::{Service, ServiceConfig};

// Mock repository holding one user and counting inserts
struct MockUsersRepository {
    users: Vec<User>,
    inserts: AtomicUsize,
}

impl MockUsersRepository {
    fn new() -> Self {
        Self {
            users: vec![User {
                id: 1,
                name: "Ivan".to_string(),
                surname: "Ivanov".to_string(),
                patronymic: None,
                age: 23,
                gender: Gender::Male,
                nationality: "RU".to_string(),
            }],
            inserts: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl UsersRepository for MockUsersRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }

    async fn list(&self, query: &UserQuery) -> Result<Vec<User>> {
        Ok(self
            .users
            .iter()
            .take(query.limit as usize)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: UserRecord) -> Result<User> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(User {
            id: 2,
            name: record.name,
            surname: record.surname,
            patronymic: record.patronymic,
            age: record.age,
            gender: record.gender,
            nationality: record.nationality,
        })
    }

    async fn update(&self, id: UserId, _user: &User) -> Result<bool> {
        Ok(self.users.iter().any(|u| u.id == id))
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        Ok(self.users.iter().any(|u| u.id == id))
    }
}

// Repository whose every call fails, to check storage error classification
struct BrokenRepository;

#[async_trait::async_trait]
impl UsersRepository for BrokenRepository {
    async fn find_by_id(&self, _id: UserId) -> Result<Option<User>> {
        anyhow::bail!("database is locked")
    }
    async fn list(&self, _query: &UserQuery) -> Result<Vec<User>> {
        anyhow::bail!("database is locked")
    }
    async fn insert(&self, _record: UserRecord) -> Result<User> {
        Err(anyhow!("UNIQUE constraint failed: users.id")).context("insert failed")
    }
    async fn update(&self, _id: UserId, _user: &User) -> Result<bool> {
        anyhow::bail!("database is locked")
    }
    async fn delete(&self, _id: UserId) -> Result<bool> {
        anyhow::bail!("database is locked")
    }
}

fn service_with(repo: Arc<dyn UsersRepository>, enrichment: Arc<StubEnrichment>) -> Service {
    Service::new(repo, enrichment, ServiceConfig::default())
}

#[traced_test]
#[tokio::test]
async fn get_user_emits_spans() {
    let service = service_with(Arc::new(MockUsersRepository::new()), ivan_enrichment());

    let user = service.get_user(1).await.unwrap();

    assert_eq!(user.name, "Ivan");
    assert!(logs_contain("users_registry.service.get_user"));
    assert!(logs_contain("Successfully retrieved user"));
}

#[traced_test]
#[tokio::test]
async fn create_user_emits_spans() {
    let repo = Arc::new(MockUsersRepository::new());
    let service = service_with(repo.clone(), ivan_enrichment());

    let created = service
        .create_user(NewUser {
            name: "Ivan".to_string(),
            surname: "Petrov".to_string(),
            patronymic: None,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 2);
    assert_eq!(repo.inserts.load(Ordering::SeqCst), 1);
    assert!(logs_contain("users_registry.service.create_user"));
    assert!(logs_contain("Successfully created user with id=2"));
}

#[traced_test]
#[tokio::test]
async fn failed_enrichment_skips_storage() {
    let repo = Arc::new(MockUsersRepository::new());
    let service = service_with(
        repo.clone(),
        Arc::new(StubEnrichment::failing(Lookup::Gender, "unsupported gender")),
    );

    let err = service
        .create_user(NewUser {
            name: "Kim".to_string(),
            surname: "Lee".to_string(),
            patronymic: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        DomainError::Enrichment {
            lookup: Lookup::Gender,
            ..
        }
    ));
    assert_eq!(repo.inserts.load(Ordering::SeqCst), 0);
}

#[traced_test]
#[tokio::test]
async fn list_users_emits_spans() {
    let service = service_with(Arc::new(MockUsersRepository::new()), ivan_enrichment());

    let users = service
        .list_users(UserFilter {
            nationality: Some("RU".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert!(logs_contain("users_registry.service.list_users"));
}

#[traced_test]
#[tokio::test]
async fn update_user_emits_spans() {
    let service = service_with(Arc::new(MockUsersRepository::new()), ivan_enrichment());

    let updated = service
        .update_user(
            1,
            UserPatch {
                gender: Some("female".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.gender, Gender::Female);
    assert!(logs_contain("users_registry.service.update_user"));
}

#[traced_test]
#[tokio::test]
async fn delete_missing_user_is_logged_not_failed() {
    let service = service_with(Arc::new(MockUsersRepository::new()), ivan_enrichment());

    service.delete_user(404).await.unwrap();

    assert!(logs_contain("users_registry.service.delete_user"));
    assert!(logs_contain("nothing to delete"));
}

#[traced_test]
#[tokio::test]
async fn storage_failures_surface_as_database_errors() {
    let service = service_with(Arc::new(BrokenRepository), ivan_enrichment());

    assert!(matches!(
        service.get_user(1).await,
        Err(DomainError::Database { .. })
    ));
    assert!(matches!(
        service.delete_user(1).await,
        Err(DomainError::Database { .. })
    ));
    let err = service
        .create_user(NewUser {
            name: "Ivan".into(),
            surname: "Ivanov".into(),
            patronymic: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));
}

#[traced_test]
#[tokio::test]
async fn database_errors_keep_the_underlying_cause() {
    let service = service_with(Arc::new(BrokenRepository), ivan_enrichment());

    let err = service
        .create_user(NewUser {
            name: "Ivan".into(),
            surname: "Ivanov".into(),
            patronymic: None,
        })
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("insert failed"), "{message}");
    assert!(message.contains("UNIQUE constraint failed: users.id"), "{message}");

    let message = service.get_user(1).await.unwrap_err().to_string();
    assert!(message.contains("database is locked"), "{message}");
}
