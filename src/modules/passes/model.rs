use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const PASS_COLUMNS: &str = "id, client_id, class_id, times_used, completed";

/// A client's punch card for one class: how many sessions they have
/// attended and whether the pass has been used up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Pass {
    pub id: i32,
    pub client_id: i32,
    pub class_id: i32,
    pub times_used: i32,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePassDto {
    #[validate(range(min = 1))]
    pub client_id: i32,
    #[validate(range(min = 1))]
    pub class_id: i32,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub times_used: i32,
    #[serde(default)]
    pub completed: bool,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdatePassDto {
    #[validate(range(min = 1))]
    pub client_id: Option<i32>,
    #[validate(range(min = 1))]
    pub class_id: Option<i32>,
    #[validate(range(min = 0))]
    pub times_used: Option<i32>,
    pub completed: Option<bool>,
}
