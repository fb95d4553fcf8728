use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::UsersRegistryApi,
    error::UsersRegistryError,
    model::{NewUser, User, UserFilter, UserId, UserPatch},
};
use crate::domain::service::Service;

/// Local implementation of the UsersRegistryApi trait that delegates to the domain service
pub struct UsersRegistryLocalClient {
    service: Arc<Service>,
}

impl UsersRegistryLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl UsersRegistryApi for UsersRegistryLocalClient {
    async fn get_user(&self, id: UserId) -> Result<User, UsersRegistryError> {
        self.service.get_user(id).await.map_err(Into::into)
    }

    async fn list_users(&self, filter: UserFilter) -> Result<Vec<User>, UsersRegistryError> {
        self.service.list_users(filter).await.map_err(Into::into)
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UsersRegistryError> {
        self.service.create_user(new_user).await.map_err(Into::into)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, UsersRegistryError> {
        self.service
            .update_user(id, patch)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UsersRegistryError> {
        self.service.delete_user(id).await.map_err(Into::into)
    }
}
