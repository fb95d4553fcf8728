//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be built with a
//! `DatabaseConnection` or a transaction.

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::contract::model::{User, UserId};
use crate::domain::query::UserQuery;
use crate::domain::repo::{UserRecord, UsersRepository};
use crate::infra::storage::entity::{ActiveModel as UserAM, Column, Entity as UserEntity};
use crate::infra::storage::mapper::replacement;
use crate::infra::storage::predicate::predicate_to_condition;

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> UsersRepository for SeaOrmUsersRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: UserId) -> anyhow::Result<Option<User>> {
        let found = UserEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        found
            .map(User::try_from)
            .transpose()
            .context("stored user row is malformed")
    }

    async fn list(&self, query: &UserQuery) -> anyhow::Result<Vec<User>> {
        let mut select = UserEntity::find();
        if !query.predicate.matches_all() {
            select = select.filter(predicate_to_condition(&query.predicate));
        }
        let rows = select
            .order_by_asc(Column::Id)
            .limit(query.limit)
            .all(&self.conn)
            .await
            .context("list failed")?;
        rows.into_iter()
            .map(|m| User::try_from(m).context("stored user row is malformed"))
            .collect()
    }

    async fn insert(&self, record: UserRecord) -> anyhow::Result<User> {
        let m: UserAM = record.into();
        let saved = m.insert(&self.conn).await.context("insert failed")?;
        User::try_from(saved).context("inserted user row is malformed")
    }

    async fn update(&self, id: UserId, user: &User) -> anyhow::Result<bool> {
        let res = UserEntity::update_many()
            .set(replacement(user))
            .filter(Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .context("update failed")?;
        Ok(res.rows_affected > 0)
    }

    async fn delete(&self, id: UserId) -> anyhow::Result<bool> {
        let res = UserEntity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("delete failed")?;
        Ok(res.rows_affected > 0)
    }
}
