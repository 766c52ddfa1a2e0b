use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::DbUser;

pub mod memory;
pub mod mongodb;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Query Error: {0}")]
    MongoDB(#[from] ::mongodb::error::Error),

    #[error(transparent)]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// A durable backing store for the admin panel.
///
/// Implementors provide the user CRUD contract plus a liveness probe for the
/// health endpoint.
#[async_trait]
pub trait Storage: UserStore + Debug + Send + Sync + 'static {
    async fn ping(&self) -> Result<(), StoreError>;
}

/// User records keyed by a store-assigned integer id.
#[async_trait]
pub trait UserStore {
    /// Insert-or-update. A record with `id: None` is inserted under the next
    /// free id; the returned record always carries its id.
    async fn save(&self, user: DbUser) -> Result<DbUser, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<DbUser>, StoreError>;

    async fn find_all(&self) -> Result<Vec<DbUser>, StoreError>;

    /// Returns `true` if a record was removed.
    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError>;
}
