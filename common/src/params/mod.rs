//! Input parameters for the various functions within the admin panel.

mod user;
pub use user::*;
