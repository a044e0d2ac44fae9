use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use super::model::{Class, ClassWithSessions, CreateClassDto, UpdateClassDto};
use super::service::ClassService;
use crate::middleware::auth::{AuthUser, RequireInstructor};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::sessions::model::Session;
use crate::modules::sessions::service::SessionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get all classes
#[utoipa::path(
    get,
    path = "/api/classes",
    responses(
        (status = 200, description = "List of classes", body = Vec<Class>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes(&state.db).await?;
    Ok(Json(classes))
}

/// Get a class together with its sessions
#[utoipa::path(
    get,
    path = "/api/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class with its sessions", body = ClassWithSessions),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<ClassWithSessions>, AppError> {
    let class = ClassService::get_with_sessions(&state.db, id).await?;
    Ok(Json(class))
}

/// Get the sessions scheduled for a class
#[utoipa::path(
    get,
    path = "/api/classes/{id}/sessions",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Sessions for the class", body = Vec<Session>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_class_sessions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = SessionService::get_by_class(&state.db, id).await?;
    Ok(Json(sessions))
}

/// Create a class (instructors only)
#[utoipa::path(
    post,
    path = "/api/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = Class),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn create_class(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// Update a class (instructors only)
#[utoipa::path(
    put,
    path = "/api/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Updated class", body = Class),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state, dto))]
pub async fn update_class(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::update_class(&state.db, id, dto).await?;
    Ok(Json(class))
}

/// Delete a class (instructors only)
#[utoipa::path(
    delete,
    path = "/api/classes/{id}",
    params(("id" = i32, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Deleted class", body = Class),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 404, description = "Class not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    Path(id): Path<i32>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::delete_class(&state.db, id).await?;
    Ok(Json(class))
}
