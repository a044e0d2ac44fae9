use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use super::model::{UpdateUserDto, User, UserProfile};
use super::service::UserService;
use crate::middleware::auth::{AuthUser, RequireSelf};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::classes::model::Class;
use crate::modules::classes::service::ClassService;
use crate::modules::passes::model::Pass;
use crate::modules::passes::service::PassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get all users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.db).await?;
    Ok(Json(users))
}

/// Get a user together with their classes and passes
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with owned classes and passes", body = UserProfile),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<UserProfile>, AppError> {
    let profile = UserService::get_profile(&state.db, id).await?;
    Ok(Json(profile))
}

/// Get the classes a user teaches
#[utoipa::path(
    get,
    path = "/api/users/{id}/classes",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Classes taught by the user", body = Vec<Class>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_classes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_by_instructor(&state.db, id).await?;
    Ok(Json(classes))
}

/// Get the passes a user holds
#[utoipa::path(
    get,
    path = "/api/users/{id}/passes",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Passes held by the user", body = Vec<Pass>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_passes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Pass>>, AppError> {
    let passes = PassService::get_by_client(&state.db, id).await?;
    Ok(Json(passes))
}

/// Update a user (own record only)
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 401, description = "Unauthorized - not this user's record", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    _auth_user: RequireSelf,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_user(&state.db, id, dto).await?;
    Ok(Json(user))
}

/// Delete a user (own record only)
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Deleted user", body = User),
        (status = 401, description = "Unauthorized - not this user's record", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    _auth_user: RequireSelf,
    Path(id): Path<i32>,
) -> Result<Json<User>, AppError> {
    let user = UserService::delete_user(&state.db, id).await?;
    Ok(Json(user))
}
