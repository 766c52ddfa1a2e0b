//! Business-rule gate in front of the persistence store.
//!
//! Translates request fields into entity mutations and store calls, and
//! store outcomes into typed results or typed failures. All per-call data is
//! local to the operation invocation.

use std::sync::Arc;

use admin_common::params::UserParams;
use admin_db::{
    models::DbUser,
    storage::{Storage, StoreError},
};
use thiserror::Error;
use tracing::debug;

#[cfg(test)]
mod tests;

#[derive(Debug, Error)]
pub enum UserServiceError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("no user with id {0}")]
    NotFound(i32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// User CRUD operations over an injected store handle.
#[derive(Debug, Clone)]
pub struct UserService {
    store: Arc<dyn Storage>,
}

impl UserService {
    pub fn new(store: Arc<dyn Storage>) -> Self {
        Self { store }
    }

    /// Create a new user from the supplied fields.
    ///
    /// Validates every field before anything is persisted; the returned
    /// record carries its store-assigned id.
    pub async fn create(&self, params: UserParams) -> Result<DbUser, UserServiceError> {
        let user = DbUser {
            id: None,
            first_name: require_field(params.first_name, "firstName")?,
            last_name: require_field(params.last_name, "lastName")?,
            email: require_field(params.email, "email")?,
        };

        let created = self.store.save(user).await?;
        if created.id.is_none() {
            return Err(
                StoreError::Internal("store returned a user without an id".into()).into(),
            );
        }

        debug!(user = %created, "created user");
        Ok(created)
    }

    /// Overwrite the three mutable fields of an existing user. The id never
    /// changes.
    pub async fn update(&self, id: i32, params: UserParams) -> Result<DbUser, UserServiceError> {
        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(UserServiceError::NotFound(id))?;

        user.first_name = require_field(params.first_name, "firstName")?;
        user.last_name = require_field(params.last_name, "lastName")?;
        user.email = require_field(params.email, "email")?;

        let updated = self.store.save(user).await?;

        debug!(user = %updated, "updated user");
        Ok(updated)
    }

    /// Look up a user by id.
    ///
    /// Absence is not an error at this layer; the HTTP adapter decides what
    /// a missing record means.
    pub async fn find(&self, id: i32) -> Result<Option<DbUser>, UserServiceError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Delete a user by id, returning the store's confirmation that a record
    /// was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, UserServiceError> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(UserServiceError::NotFound(id));
        }

        let deleted = self.store.delete_by_id(id).await?;

        debug!(id, deleted, "deleted user");
        Ok(deleted)
    }

    /// All users, unordered.
    pub async fn list(&self) -> Result<Vec<DbUser>, UserServiceError> {
        Ok(self.store.find_all().await?)
    }
}

/// A required field must be present and not blank.
fn require_field(value: Option<String>, name: &'static str) -> Result<String, UserServiceError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(UserServiceError::MissingField(name)),
    }
}
