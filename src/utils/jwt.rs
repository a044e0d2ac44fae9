use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    InvalidSignature,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Expired => write!(f, "token is expired"),
            TokenError::InvalidSignature => write!(f, "token signature is invalid"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Signs a token carrying the user's id and role flags. Expiry defaults
/// to 240 minutes after issuance (`JWT_EXPIRY` overrides).
pub fn generate_token(user: &User, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.token_expiry;

    let claims = Claims {
        sub: user.id.to_string(),
        instructor: user.instructor,
        client: user.client,
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Decodes and checks a presented token. Callers must match on the result
/// before touching any claim; a rejected token never exposes claims.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::InvalidSignature,
    })
}
