use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::classes::service::ClassService;
use crate::modules::passes::service::PassService;
use crate::modules::users::model::{USER_COLUMNS, UpdateUserDto, User, UserProfile};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    pub async fn get_users(db: &PgPool) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(db)
            .await
            .context("Failed to fetch users")
            .map_err(AppError::database)
    }

    pub async fn get_user(db: &PgPool, id: i32) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch user by id")
            .map_err(AppError::not_found)?
            .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))
    }

    /// Composite read: the user plus the classes they teach and the
    /// passes they hold. The three queries run concurrently with no
    /// snapshot guarantee across them.
    #[instrument(skip(db))]
    pub async fn get_profile(db: &PgPool, id: i32) -> Result<UserProfile, AppError> {
        let (user, classes, passes) = tokio::try_join!(
            Self::get_user(db, id),
            ClassService::get_by_instructor(db, id),
            PassService::get_by_client(db, id),
        )?;

        Ok(UserProfile {
            user,
            classes,
            passes,
        })
    }

    #[instrument(skip(db, dto))]
    pub async fn update_user(db: &PgPool, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "UPDATE users
             SET username = COALESCE($2, username),
                 first_name = COALESCE($3, first_name),
                 last_name = COALESCE($4, last_name),
                 client = COALESCE($5, client),
                 instructor = COALESCE($6, instructor)
             WHERE id = $1
             RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.username)
        .bind(dto.first_name)
        .bind(dto.last_name)
        .bind(dto.client)
        .bind(dto.instructor)
        .fetch_optional(db)
        .await
        .context("Failed to update user")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &PgPool, id: i32) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(&format!(
            "DELETE FROM users WHERE id = $1 RETURNING {USER_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to delete user")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("User with id {} not found", id)))
    }
}
