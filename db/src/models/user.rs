use std::fmt::Display;

use admin_common::views::User;
use serde::{Deserialize, Serialize};

/// A user record as stored in the `users` collection.
///
/// `id` is `None` until the store assigns one on insert; every record read
/// back from the store carries its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbUser {
    #[serde(rename = "_id")]
    pub id: Option<i32>,

    pub first_name: String,

    pub last_name: String,

    pub email: String,
}

impl Display for DbUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DbUser {{ id: {:?}, first_name: {}, last_name: {}, email: {} }}",
            self.id, self.first_name, self.last_name, self.email
        )
    }
}

impl From<DbUser> for User {
    fn from(value: DbUser) -> Self {
        Self {
            // Persisted records always carry an id; the service layer rejects
            // store results without one before they reach a view.
            id: value.id.unwrap_or_default(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}
