use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// The store-assigned identifier for this user.
    pub id: i32,

    /// The user's first name.
    pub first_name: String,

    /// The user's last name.
    pub last_name: String,

    /// The user's email address.
    pub email: String,
}
