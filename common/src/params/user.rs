use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or updating a user.
///
/// All three fields are required by the service layer; they are optional here
/// so a missing field reaches validation as an absent value instead of being
/// rejected during deserialization.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserParams {
    /// The user's first name.
    pub first_name: Option<String>,

    /// The user's last name.
    pub last_name: Option<String>,

    /// The user's email address.
    pub email: Option<String>,
}
