use async_trait::async_trait;

use crate::contract::{
    error::UsersRegistryError,
    model::{NewUser, User, UserFilter, UserId, UserPatch},
};

/// Public API trait for the users_registry module that other modules can use
#[async_trait]
pub trait UsersRegistryApi: Send + Sync {
    /// Get a user by ID
    async fn get_user(&self, id: UserId) -> Result<User, UsersRegistryError>;

    /// List users matching the filter, bounded by its limit
    async fn list_users(&self, filter: UserFilter) -> Result<Vec<User>, UsersRegistryError>;

    /// Enrich and persist a new user
    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersRegistryError>;

    /// Merge a partial update onto the stored user
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, UsersRegistryError>;

    /// Delete a user by ID
    async fn delete_user(&self, id: UserId) -> Result<(), UsersRegistryError>;
}
