//! User models and DTOs.
//!
//! [`User`] is the public projection — the password column never leaves
//! the database except through [`UserCredentials`], which exists only
//! for login verification and is never serialized.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::classes::model::Class;
use crate::modules::passes::model::Pass;

/// Column list for the public projection. Every query returning a
/// [`User`] selects exactly these.
pub const USER_COLUMNS: &str = "id, username, first_name, last_name, client, instructor";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub client: bool,
    pub instructor: bool,
}

/// Full user row including the password hash. Login-path only.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub client: bool,
    pub instructor: bool,
}

impl From<UserCredentials> for User {
    fn from(credentials: UserCredentials) -> Self {
        Self {
            id: credentials.id,
            username: credentials.username,
            first_name: credentials.first_name,
            last_name: credentials.last_name,
            client: credentials.client,
            instructor: credentials.instructor,
        }
    }
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 3))]
    pub username: Option<String>,
    #[validate(length(min = 1))]
    pub first_name: Option<String>,
    #[validate(length(min = 1))]
    pub last_name: Option<String>,
    pub client: Option<bool>,
    pub instructor: Option<bool>,
}

/// A user joined with the classes they teach and the passes they hold.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: User,
    pub classes: Vec<Class>,
    pub passes: Vec<Pass>,
}
