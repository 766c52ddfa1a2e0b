mod create_user;
pub use create_user::*;

mod delete_user;
pub use delete_user::*;

mod list_users;
pub use list_users::*;
