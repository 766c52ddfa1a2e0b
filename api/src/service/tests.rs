use std::sync::Arc;

use admin_common::params::UserParams;
use admin_db::storage::memory::MemoryStorage;

use super::{UserService, UserServiceError};

fn service() -> UserService {
    UserService::new(Arc::new(MemoryStorage::new()))
}

fn params(first_name: &str, last_name: &str, email: &str) -> UserParams {
    UserParams {
        first_name: Some(first_name.into()),
        last_name: Some(last_name.into()),
        email: Some(email.into()),
    }
}

#[tokio::test]
async fn test_create_returns_store_assigned_id() {
    let users = service();

    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();

    assert!(created.id.unwrap() > 0);
    assert_eq!(created.first_name, "Ana");
    assert_eq!(created.last_name, "Ruiz");
    assert_eq!(created.email, "ana@x.com");
}

#[tokio::test]
async fn test_create_missing_field_persists_nothing() {
    let users = service();

    let missing = [
        UserParams {
            first_name: None,
            ..params("Ana", "Ruiz", "ana@x.com")
        },
        UserParams {
            last_name: None,
            ..params("Ana", "Ruiz", "ana@x.com")
        },
        UserParams {
            email: None,
            ..params("Ana", "Ruiz", "ana@x.com")
        },
    ];

    for body in missing {
        let err = users.create(body).await.unwrap_err();
        assert!(matches!(err, UserServiceError::MissingField(_)));
    }

    assert!(users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_blank_field_counts_as_missing() {
    let users = service();

    let err = users.create(params("Ana", "Ruiz", "  ")).await.unwrap_err();

    assert!(matches!(err, UserServiceError::MissingField("email")));
    assert!(users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_unknown_id_creates_nothing() {
    let users = service();

    let err = users
        .update(7, params("Ana", "Ruiz", "ana@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, UserServiceError::NotFound(7)));
    assert!(users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_keeps_id_and_overwrites_fields() {
    let users = service();
    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();
    let id = created.id.unwrap();

    let updated = users
        .update(id, params("Anna", "Ruiz-Soler", "ana2@x.com"))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.first_name, "Anna");
    assert_eq!(updated.last_name, "Ruiz-Soler");
    assert_eq!(updated.email, "ana2@x.com");

    let found = users.find(id).await.unwrap().unwrap();
    assert_eq!(found, updated);
}

#[tokio::test]
async fn test_update_missing_field_leaves_record_untouched() {
    let users = service();
    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();
    let id = created.id.unwrap();

    let err = users
        .update(
            id,
            UserParams {
                email: None,
                ..params("Anna", "Ruiz-Soler", "ana2@x.com")
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, UserServiceError::MissingField("email")));
    assert_eq!(users.find(id).await.unwrap().unwrap(), created);
}

#[tokio::test]
async fn test_delete_confirms_and_removes() {
    let users = service();
    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();
    let id = created.id.unwrap();

    assert!(users.delete(id).await.unwrap());
    assert!(users.find(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_unknown_id_leaves_store_unmodified() {
    let users = service();
    users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();

    let err = users.delete(99).await.unwrap_err();

    assert!(matches!(err, UserServiceError::NotFound(99)));
    assert_eq!(users.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_returns_every_created_record() {
    let users = service();

    for i in 0..5 {
        users
            .create(params("Ana", "Ruiz", &format!("ana{i}@x.com")))
            .await
            .unwrap();
    }

    assert_eq!(users.list().await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_find_round_trip() {
    let users = service();

    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();
    let found = users.find(created.id.unwrap()).await.unwrap().unwrap();

    assert_eq!(found, created);
}

/// The full lifecycle in one pass: create, read back, overwrite, delete,
/// observe absence.
#[tokio::test]
async fn test_crud_lifecycle() {
    let users = service();

    let created = users.create(params("Ana", "Ruiz", "ana@x.com")).await.unwrap();
    assert_eq!(created.id, Some(1));

    let found = users.find(1).await.unwrap().unwrap();
    assert_eq!(found.email, "ana@x.com");

    let updated = users.update(1, params("Ana", "Ruiz", "ana2@x.com")).await.unwrap();
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.email, "ana2@x.com");

    assert!(users.delete(1).await.unwrap());
    assert!(users.find(1).await.unwrap().is_none());
}
