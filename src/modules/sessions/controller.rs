use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use super::model::{CreateSessionDto, Session, UpdateSessionDto};
use super::service::SessionService;
use crate::middleware::auth::{AuthUser, RequireInstructor};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get all sessions
#[utoipa::path(
    get,
    path = "/api/sessions",
    responses(
        (status = 200, description = "List of sessions", body = Vec<Session>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_sessions(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Session>>, AppError> {
    let sessions = SessionService::get_sessions(&state.db).await?;
    Ok(Json(sessions))
}

/// Get a session by id
#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = i32, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Session", body = Session),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::get_session(&state.db, id).await?;
    Ok(Json(session))
}

/// Schedule a session (instructors only)
#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = CreateSessionDto,
    responses(
        (status = 201, description = "Session created", body = Session),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn create_session(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    ValidatedJson(dto): ValidatedJson<CreateSessionDto>,
) -> Result<(StatusCode, Json<Session>), AppError> {
    let session = SessionService::create_session(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Update a session (instructors only)
#[utoipa::path(
    put,
    path = "/api/sessions/{id}",
    params(("id" = i32, Path, description = "Session ID")),
    request_body = UpdateSessionDto,
    responses(
        (status = 200, description = "Updated session", body = Session),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state, dto))]
pub async fn update_session(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateSessionDto>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::update_session(&state.db, id, dto).await?;
    Ok(Json(session))
}

/// Delete a session (instructors only)
#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = i32, Path, description = "Session ID")),
    responses(
        (status = 200, description = "Deleted session", body = Session),
        (status = 401, description = "Unauthorized - instructor token required", body = ErrorResponse),
        (status = 404, description = "Session not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Sessions"
)]
#[instrument(skip(state))]
pub async fn delete_session(
    State(state): State<AppState>,
    _auth_user: RequireInstructor,
    Path(id): Path<i32>,
) -> Result<Json<Session>, AppError> {
    let session = SessionService::delete_session(&state.db, id).await?;
    Ok(Json(session))
}
