use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path},
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

const NOT_AUTHORIZED: &str = "This user isn't authorized to take this action!";

/// Extractor that admits any request carrying a valid token and exposes
/// the decoded claims.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn is_instructor(&self) -> bool {
        self.0.instructor
    }

    pub fn is_client(&self) -> bool {
        self.0.client
    }

    /// The token subject as a user id.
    pub fn user_id(&self) -> Result<i32, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid user id in token")))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The header value is the token itself, no "Bearer " prefix.
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated(anyhow!("No token found!")))?;

        let claims = verify_token(token, &state.jwt_config)
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid token!")))?;

        Ok(AuthUser(claims))
    }
}

/// Valid token whose subject matches the `:id` path parameter. Users may
/// only act on their own record through routes guarded with this.
#[derive(Debug, Clone)]
pub struct RequireSelf(pub AuthUser);

impl FromRequestParts<AppState> for RequireSelf {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request(anyhow!("Invalid id in request path")))?;

        if auth_user.0.sub != id.to_string() {
            return Err(AppError::forbidden(anyhow!(NOT_AUTHORIZED)));
        }

        Ok(RequireSelf(auth_user))
    }
}

/// Generates an extractor that admits a valid token only when the named
/// role flag is set in its claims.
macro_rules! require_flag {
    ($name:ident, $flag:ident) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub AuthUser);

        impl FromRequestParts<AppState> for $name {
            type Rejection = AppError;

            async fn from_request_parts(
                parts: &mut Parts,
                state: &AppState,
            ) -> Result<Self, Self::Rejection> {
                let auth_user = AuthUser::from_request_parts(parts, state).await?;

                if !auth_user.0.$flag {
                    return Err(AppError::forbidden(anyhow!(NOT_AUTHORIZED)));
                }

                Ok($name(auth_user))
            }
        }
    };
}

require_flag!(RequireClient, client);
require_flag!(RequireInstructor, instructor);

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str, instructor: bool, client: bool) -> Claims {
        Claims {
            sub: sub.to_string(),
            instructor,
            client,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn test_role_flags() {
        let instructor = AuthUser(claims("1", true, false));
        assert!(instructor.is_instructor());
        assert!(!instructor.is_client());

        let client = AuthUser(claims("2", false, true));
        assert!(client.is_client());
        assert!(!client.is_instructor());

        let both = AuthUser(claims("3", true, true));
        assert!(both.is_instructor());
        assert!(both.is_client());
    }

    #[test]
    fn test_user_id_parses_subject() {
        let auth_user = AuthUser(claims("42", false, true));
        assert_eq!(auth_user.user_id().unwrap(), 42);
    }

    #[test]
    fn test_user_id_rejects_non_numeric_subject() {
        let auth_user = AuthUser(claims("not-a-number", false, true));
        assert!(auth_user.user_id().is_err());
    }
}
