use axum::http::StatusCode;
use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use super::model::{CreatePassDto, Pass, UpdatePassDto};
use super::service::PassService;
use crate::middleware::auth::{AuthUser, RequireClient};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Get all passes
#[utoipa::path(
    get,
    path = "/api/passes",
    responses(
        (status = 200, description = "List of passes", body = Vec<Pass>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Passes"
)]
#[instrument(skip(state))]
pub async fn get_passes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Pass>>, AppError> {
    let passes = PassService::get_passes(&state.db).await?;
    Ok(Json(passes))
}

/// Get a pass by id
#[utoipa::path(
    get,
    path = "/api/passes/{id}",
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Pass", body = Pass),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Pass not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Passes"
)]
#[instrument(skip(state))]
pub async fn get_pass(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Pass>, AppError> {
    let pass = PassService::get_pass(&state.db, id).await?;
    Ok(Json(pass))
}

/// Buy a pass (clients only)
#[utoipa::path(
    post,
    path = "/api/passes",
    request_body = CreatePassDto,
    responses(
        (status = 201, description = "Pass created", body = Pass),
        (status = 400, description = "Bad request - malformed body", body = ErrorResponse),
        (status = 401, description = "Unauthorized - client token required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Passes"
)]
#[instrument(skip(state, dto))]
pub async fn create_pass(
    State(state): State<AppState>,
    _auth_user: RequireClient,
    ValidatedJson(dto): ValidatedJson<CreatePassDto>,
) -> Result<(StatusCode, Json<Pass>), AppError> {
    let pass = PassService::create_pass(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(pass)))
}

/// Update a pass (clients only)
#[utoipa::path(
    put,
    path = "/api/passes/{id}",
    params(("id" = i32, Path, description = "Pass ID")),
    request_body = UpdatePassDto,
    responses(
        (status = 200, description = "Updated pass", body = Pass),
        (status = 401, description = "Unauthorized - client token required", body = ErrorResponse),
        (status = 404, description = "Pass not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Passes"
)]
#[instrument(skip(state, dto))]
pub async fn update_pass(
    State(state): State<AppState>,
    _auth_user: RequireClient,
    Path(id): Path<i32>,
    ValidatedJson(dto): ValidatedJson<UpdatePassDto>,
) -> Result<Json<Pass>, AppError> {
    let pass = PassService::update_pass(&state.db, id, dto).await?;
    Ok(Json(pass))
}

/// Delete a pass (clients only)
#[utoipa::path(
    delete,
    path = "/api/passes/{id}",
    params(("id" = i32, Path, description = "Pass ID")),
    responses(
        (status = 200, description = "Deleted pass", body = Pass),
        (status = 401, description = "Unauthorized - client token required", body = ErrorResponse),
        (status = 404, description = "Pass not found", body = ErrorResponse)
    ),
    security(("token_auth" = [])),
    tag = "Passes"
)]
#[instrument(skip(state))]
pub async fn delete_pass(
    State(state): State<AppState>,
    _auth_user: RequireClient,
    Path(id): Path<i32>,
) -> Result<Json<Pass>, AppError> {
    let pass = PassService::delete_pass(&state.db, id).await?;
    Ok(Json(pass))
}
