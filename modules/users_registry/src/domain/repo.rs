use async_trait::async_trait;

use crate::contract::model::{Gender, User, UserId};
use crate::domain::query::UserQuery;

/// A complete user record that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub surname: String,
    pub patronymic: Option<String>,
    pub age: i32,
    pub gender: Gender,
    pub nationality: String,
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Load a user by id.
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>>;
    /// Rows matching the query predicate, ordered by id, at most `query.limit`.
    async fn list(&self, query: &UserQuery) -> anyhow::Result<Vec<User>>;
    /// Insert a fully enriched record; the store assigns the id.
    async fn insert(&self, record: UserRecord) -> anyhow::Result<User>;
    /// Replace every mutable column of `id`. Returns false if no row had that id.
    async fn update(&self, id: UserId, user: &User) -> anyhow::Result<bool>;
    /// Delete by id. Returns true if a row was deleted.
    async fn delete(&self, id: UserId) -> anyhow::Result<bool>;
}
