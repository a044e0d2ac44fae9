use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::sessions::model::{
    CreateSessionDto, SESSION_COLUMNS, Session, UpdateSessionDto,
};
use crate::utils::errors::AppError;

pub struct SessionService;

impl SessionService {
    pub async fn get_sessions(db: &PgPool) -> Result<Vec<Session>, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions ORDER BY id"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch sessions")
        .map_err(AppError::database)
    }

    pub async fn get_session(db: &PgPool, id: i32) -> Result<Session, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch session by id")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Session with id {} not found", id)))
    }

    pub async fn get_by_class(db: &PgPool, class_id: i32) -> Result<Vec<Session>, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM sessions WHERE class_id = $1 ORDER BY date_time"
        ))
        .bind(class_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch sessions by class")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto), fields(session.class_id = %dto.class_id))]
    pub async fn create_session(db: &PgPool, dto: CreateSessionDto) -> Result<Session, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "INSERT INTO sessions (class_id, date_time)
             VALUES ($1, $2)
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(dto.class_id)
        .bind(dto.date_time)
        .fetch_one(db)
        .await
        .context("Failed to insert session")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_session(
        db: &PgPool,
        id: i32,
        dto: UpdateSessionDto,
    ) -> Result<Session, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "UPDATE sessions
             SET class_id = COALESCE($2, class_id),
                 date_time = COALESCE($3, date_time)
             WHERE id = $1
             RETURNING {SESSION_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.class_id)
        .bind(dto.date_time)
        .fetch_optional(db)
        .await
        .context("Failed to update session")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Session with id {} not found", id)))
    }

    #[instrument(skip(db))]
    pub async fn delete_session(db: &PgPool, id: i32) -> Result<Session, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "DELETE FROM sessions WHERE id = $1 RETURNING {SESSION_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to delete session")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Session with id {} not found", id)))
    }
}
