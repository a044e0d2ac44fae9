use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use crate::modules::classes::model::{
    CLASS_COLUMNS, Class, ClassWithSessions, CreateClassDto, UpdateClassDto,
};
use crate::modules::sessions::service::SessionService;
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    pub async fn get_classes(db: &PgPool) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes ORDER BY id"))
            .fetch_all(db)
            .await
            .context("Failed to fetch classes")
            .map_err(AppError::database)
    }

    pub async fn get_class(db: &PgPool, id: i32) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!("SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch class by id")
            .map_err(AppError::not_found)?
            .ok_or_else(|| AppError::not_found(anyhow!("Class with id {} not found", id)))
    }

    /// Composite read: the class plus its sessions, fetched concurrently
    /// with no snapshot guarantee across the two queries.
    #[instrument(skip(db))]
    pub async fn get_with_sessions(db: &PgPool, id: i32) -> Result<ClassWithSessions, AppError> {
        let (class, sessions) = tokio::try_join!(
            Self::get_class(db, id),
            SessionService::get_by_class(db, id),
        )?;

        Ok(ClassWithSessions { class, sessions })
    }

    pub async fn get_by_instructor(db: &PgPool, instructor_id: i32) -> Result<Vec<Class>, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE instructor_id = $1 ORDER BY id"
        ))
        .bind(instructor_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch classes by instructor")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto), fields(class.name = %dto.name))]
    pub async fn create_class(db: &PgPool, dto: CreateClassDto) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes (name, type, location, instructor_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.class_type)
        .bind(&dto.location)
        .bind(dto.instructor_id)
        .fetch_one(db)
        .await
        .context("Failed to insert class")
        .map_err(AppError::database)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &PgPool,
        id: i32,
        dto: UpdateClassDto,
    ) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes
             SET name = COALESCE($2, name),
                 type = COALESCE($3, type),
                 location = COALESCE($4, location),
                 instructor_id = COALESCE($5, instructor_id)
             WHERE id = $1
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .bind(dto.name)
        .bind(dto.class_type)
        .bind(dto.location)
        .bind(dto.instructor_id)
        .fetch_optional(db)
        .await
        .context("Failed to update class")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Class with id {} not found", id)))
    }

    #[instrument(skip(db))]
    pub async fn delete_class(db: &PgPool, id: i32) -> Result<Class, AppError> {
        sqlx::query_as::<_, Class>(&format!(
            "DELETE FROM classes WHERE id = $1 RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to delete class")
        .map_err(AppError::not_found)?
        .ok_or_else(|| AppError::not_found(anyhow!("Class with id {} not found", id)))
    }
}
