use std::sync::Arc;

use crate::contract::model::{NewUser, User, UserFilter, UserId, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::merge::merge;
use crate::domain::ports::EnrichmentPort;
use crate::domain::query::{build_query, DEFAULT_LIMIT};
use crate::domain::repo::{UserRecord, UsersRepository};
use crate::domain::validation;
use tracing::{debug, info, instrument};

/// Domain service with business rules for the user registry.
/// Depends only on the storage and enrichment ports, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn UsersRepository>,
    enrichment: Arc<dyn EnrichmentPort>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub default_limit: u64,
    pub max_limit: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: 50,
        }
    }
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        enrichment: Arc<dyn EnrichmentPort>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            enrichment,
            config,
        }
    }

    #[instrument(name = "users_registry.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        debug!("Getting user by id");

        let user = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?
            .ok_or_else(|| DomainError::user_not_found(id))?;
        debug!("Successfully retrieved user");
        Ok(user)
    }

    #[instrument(name = "users_registry.service.list_users", skip(self, filter))]
    pub async fn list_users(&self, filter: UserFilter) -> Result<Vec<User>, DomainError> {
        debug!("Listing users");

        validation::validate_filter(&filter, self.config.default_limit, self.config.max_limit)?;
        let query = build_query(&filter, self.config.default_limit);

        let users = self
            .repo
            .list(&query)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        debug!(
            limit = query.limit,
            "Successfully listed {} users",
            users.len()
        );
        Ok(users)
    }

    #[instrument(
        name = "users_registry.service.create_user",
        skip(self),
        fields(name = %new_user.name, surname = %new_user.surname)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        validation::validate_new_user(&new_user)?;

        // Any lookup failure aborts before storage is touched.
        let enriched = self.enrichment.enrich(&new_user.name).await?;
        debug!(
            age = enriched.age,
            gender = %enriched.gender,
            nationality = %enriched.nationality,
            "Enrichment completed"
        );

        let record = UserRecord {
            name: new_user.name,
            surname: new_user.surname,
            patronymic: new_user.patronymic.filter(|p| !p.is_empty()),
            age: enriched.age,
            gender: enriched.gender,
            nationality: enriched.nationality,
        };

        let user = self
            .repo
            .insert(record)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        info!("Successfully created user with id={}", user.id);
        Ok(user)
    }

    #[instrument(
        name = "users_registry.service.update_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        validation::validate_patch(&patch)?;

        let current = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        let merged = merge(current, &patch);
        validation::validate_user(&merged)?;

        let existed = self
            .repo
            .update(id, &merged)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        // Row vanished between load and write.
        if !existed {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully updated user");
        Ok(merged)
    }

    #[instrument(
        name = "users_registry.service.delete_user",
        skip(self),
        fields(user_id = %id)
    )]
    pub async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        info!("Deleting user");

        let deleted = self
            .repo
            .delete(id)
            .await
            .map_err(|e| DomainError::database(format!("{e:#}")))?;

        if deleted {
            info!("Successfully deleted user");
        } else {
            debug!("No user with this id, nothing to delete");
        }
        Ok(())
    }
}
