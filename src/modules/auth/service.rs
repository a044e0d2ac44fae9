use anyhow::anyhow;
use sqlx::PgPool;
use tracing::{instrument, warn};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{LoginRequest, LoginResponse, RegisterRequestDto};
use crate::modules::users::model::{USER_COLUMNS, User, UserCredentials};
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;
use crate::utils::password::{hash_password, verify_password};

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto), fields(user.username = %dto.username))]
    pub async fn register_user(db: &PgPool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let hashed = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (username, password, first_name, last_name, client, instructor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {USER_COLUMNS}"
        ))
        .bind(&dto.username)
        .bind(&hashed)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(dto.client)
        .bind(dto.instructor)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(user.username = %dto.username, "Username already taken");
                return AppError::bad_request(anyhow!("Username already taken"));
            }
            AppError::database(anyhow!("Failed to insert user: {}", e))
        })?;

        Ok(user)
    }

    #[instrument(skip(db, dto, jwt_config), fields(user.username = %dto.username))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let credentials = sqlx::query_as::<_, UserCredentials>(
            "SELECT id, username, password, first_name, last_name, client, instructor
             FROM users
             WHERE username = $1",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await
        .map_err(|e| AppError::database(anyhow!("Failed to fetch user for login: {}", e)))?
        .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid username or password")))?;

        if !verify_password(&dto.password, &credentials.password)? {
            warn!(user.username = %dto.username, "Failed login attempt");
            return Err(AppError::unauthorized(anyhow!(
                "Invalid username or password"
            )));
        }

        let user = User::from(credentials);
        let token = generate_token(&user, jwt_config)?;

        Ok(LoginResponse { token, user })
    }
}
