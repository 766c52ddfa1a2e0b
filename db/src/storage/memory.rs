//! In-memory store, backing the unit tests and the OpenAPI dump path, both
//! of which must work without a live database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::{
    models::DbUser,
    storage::{Storage, StoreError, UserStore},
};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    users: RwLock<HashMap<i32, DbUser>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_poisoned() -> StoreError {
    StoreError::Internal("user table lock poisoned".into())
}

#[async_trait]
impl UserStore for MemoryStorage {
    async fn save(&self, mut user: DbUser) -> Result<DbUser, StoreError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;

        let id = match user.id {
            Some(id) => id,
            None => users.keys().copied().max().unwrap_or(0) + 1,
        };

        user.id = Some(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<DbUser>, StoreError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;

        Ok(users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<DbUser>, StoreError> {
        let users = self.users.read().map_err(|_| lock_poisoned())?;

        Ok(users.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let mut users = self.users.write().map_err(|_| lock_poisoned())?;

        Ok(users.remove(&id).is_some())
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first_name: &str, last_name: &str, email: &str) -> DbUser {
        DbUser {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let store = MemoryStorage::new();

        let first = store.save(user("Ana", "Ruiz", "ana@x.com")).await.unwrap();
        let second = store.save(user("Bo", "Lindgren", "bo@x.com")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_in_place() {
        let store = MemoryStorage::new();

        let created = store.save(user("Ana", "Ruiz", "ana@x.com")).await.unwrap();

        let mut changed = created.clone();
        changed.email = "ana2@x.com".into();
        store.save(changed).await.unwrap();

        let found = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.email, "ana2@x.com");
        assert_eq!(store.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_none() {
        let store = MemoryStorage::new();

        assert!(store.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_record_was_removed() {
        let store = MemoryStorage::new();
        store.save(user("Ana", "Ruiz", "ana@x.com")).await.unwrap();

        assert!(store.delete_by_id(1).await.unwrap());
        assert!(!store.delete_by_id(1).await.unwrap());
        assert!(store.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_unrelated_deletes() {
        let store = MemoryStorage::new();
        store.save(user("Ana", "Ruiz", "ana@x.com")).await.unwrap();
        let second = store.save(user("Bo", "Lindgren", "bo@x.com")).await.unwrap();

        store.delete_by_id(1).await.unwrap();
        let third = store.save(user("Cy", "Okafor", "cy@x.com")).await.unwrap();

        assert_eq!(second.id, Some(2));
        assert_eq!(third.id, Some(3));
    }
}
