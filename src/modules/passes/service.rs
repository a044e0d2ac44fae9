use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::passes::model::{CreatePassDto, PASS_COLUMNS, Pass, UpdatePassDto};
use crate::utils::errors::AppError;

pub struct PassService;

impl PassService {
    pub async fn get_passes(db: &PgPool) -> Result<Vec<Pass>, AppError> {
        sqlx::query_as::<_, Pass>(&format!("SELECT {PASS_COLUMNS} FROM passes ORDER BY id"))
            .fetch_all(db)
            .await
            .context("Failed to fetch passes")
            .map_err(AppError::database)
    }

    pub async fn get_pass(db: &PgPool, id: i32) -> Result<Pass, AppError> {
        sqlx::query_as::<_, Pass>(&format!("SELECT {PASS_COLUMNS} FROM passes WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch pass by id")
            .map_err(AppError::not_found)?
            .ok_or_else(|| AppError::not_found(anyhow!("Pass with id {} not found", id)))
    }

    pub async fn get_by_client(db: &PgPool, client_id: i32) -> Result<Vec<Pass>, AppError> {
        sqlx::query_as::<_, Pass>(&format!(
            "SELECT {PASS_COLUMNS} FROM passes WHERE client_id = $1 ORDER BY id"
        ))
        .bind(client_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch passes by client")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto), fields(pass.client_id = %dto.client_id, pass.class_id = %dto.class_id))]
    pub async fn create_pass(db: &PgPool, dto: CreatePassDto) -> Result<Pass, AppError> {
        sqlx::query_as::<_, Pass>(&format!(
            "INSERT INTO passes (client_id, class_id, times_used, completed)
             VALUES ($1, $2, $3, $4)
             RETURNING {PASS_COLUMNS}"
        ))
        .bind(dto.client_id)
        .bind(dto.class_id)
        .bind(dto.times_used)
        .bind(dto.completed)
        .fetch_one(db)
        .await
        .context("Failed to insert pass")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_pass(db: &PgPool, id: i32, dto: UpdatePassDto) -> Result<Pass, AppError> {
        sqlx::query_as::<_, Pass>(&format!(
            "UPDATE passes
             SET client_id = COALESCE($2, client_id),
                 class_id = COALESCE($3, class_id),
                 times_used = COALESCE($4, times_used),
                 completed = COALESCE($5, completed)
             WHERE id = $1
             RETURNING {PASS_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.client_id)
        .bind(dto.class_id)
        .bind(dto.times_used)
        .bind(dto.completed)
        .fetch_optional(db)
        .await
        .context("Failed to update pass")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Pass with id {} not found", id)))
    }

    #[instrument(skip(db))]
    pub async fn delete_pass(db: &PgPool, id: i32) -> Result<Pass, AppError> {
        sqlx::query_as::<_, Pass>(&format!(
            "DELETE FROM passes WHERE id = $1 RETURNING {PASS_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to delete pass")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Pass with id {} not found", id)))
    }
}
