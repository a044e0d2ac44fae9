use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::sessions::model::Session;

/// Column list for class queries. `type` is a reserved word in Rust, so
/// the column is aliased to the `class_type` field and renamed back to
/// `type` on the wire.
pub const CLASS_COLUMNS: &str = "id, name, type AS class_type, location, instructor_id";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Class {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub class_type: String,
    pub location: String,
    pub instructor_id: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub class_type: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(range(min = 1))]
    pub instructor_id: i32,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateClassDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub class_type: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(range(min = 1))]
    pub instructor_id: Option<i32>,
}

/// A class joined with its scheduled sessions.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassWithSessions {
    #[serde(flatten)]
    pub class: Class,
    pub sessions: Vec<Session>,
}
