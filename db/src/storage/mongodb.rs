use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Database, bson::doc, options::ReturnDocument};
use serde::{Deserialize, Serialize};

use crate::{
    models::DbUser,
    storage::{Storage, StoreError, UserStore},
};

#[derive(Debug)]
pub struct MongoStorage(Client);

impl MongoStorage {
    pub async fn new(uri: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self(client))
    }

    fn get_db(&self) -> Database {
        self.0
            .default_database()
            .unwrap_or_else(|| self.0.database("admin_panel"))
    }

    /// Allocate the next user id from the `counters` collection.
    async fn next_user_id(&self) -> Result<i32, StoreError> {
        let counters = self
            .get_db()
            .collection::<IdCounter>(MONGODB_COLLECTION_COUNTERS);

        let counter = counters
            .find_one_and_update(
                doc! { "_id": USER_ID_COUNTER },
                doc! { "$inc": { "seq": 1 } },
            )
            .upsert(true)
            .return_document(ReturnDocument::After)
            .await?;

        counter.map(|c| c.seq).ok_or_else(|| {
            StoreError::Internal("id counter upsert returned no document".into())
        })
    }
}

pub const MONGODB_COLLECTION_USERS: &str = "users";
pub const MONGODB_COLLECTION_COUNTERS: &str = "counters";

const USER_ID_COUNTER: &str = "user_id";

/// One named integer sequence in the `counters` collection.
#[derive(Debug, Serialize, Deserialize)]
struct IdCounter {
    #[serde(rename = "_id")]
    name: String,
    seq: i32,
}

#[async_trait]
impl UserStore for MongoStorage {
    async fn save(&self, mut user: DbUser) -> Result<DbUser, StoreError> {
        let users = self
            .get_db()
            .collection::<DbUser>(MONGODB_COLLECTION_USERS);

        match user.id {
            Some(id) => {
                users
                    .replace_one(doc! { "_id": id }, &user)
                    .upsert(true)
                    .await?;
            }
            None => {
                user.id = Some(self.next_user_id().await?);
                users.insert_one(&user).await?;
            }
        }

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<DbUser>, StoreError> {
        let users = self
            .get_db()
            .collection::<DbUser>(MONGODB_COLLECTION_USERS);

        users
            .find_one(doc! { "_id": id })
            .await
            .map_err(StoreError::MongoDB)
    }

    async fn find_all(&self) -> Result<Vec<DbUser>, StoreError> {
        let users = self
            .get_db()
            .collection::<DbUser>(MONGODB_COLLECTION_USERS);

        users
            .find(doc! {})
            .await?
            .try_collect()
            .await
            .map_err(StoreError::MongoDB)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, StoreError> {
        let users = self
            .get_db()
            .collection::<DbUser>(MONGODB_COLLECTION_USERS);

        let result = users.delete_one(doc! { "_id": id }).await?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Storage for MongoStorage {
    async fn ping(&self) -> Result<(), StoreError> {
        self.get_db().run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
