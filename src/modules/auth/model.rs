use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::User;

/// Token claims: the user's id plus the two role flags every guard
/// decision is made from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub instructor: bool,
    pub client: bool,
    pub exp: usize,
    pub iat: usize,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// A user can sign up as a client, an instructor, or both.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequestDto {
    #[validate(length(min = 3))]
    pub username: String,
    #[validate(length(min = 8))]
    pub password: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[serde(default)]
    pub client: bool,
    #[serde(default)]
    pub instructor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_dto_deserialize() {
        let json = r#"{"username":"jane","password":"password123","first_name":"Jane","last_name":"Smith","instructor":true}"#;
        let dto: RegisterRequestDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.username, "jane");
        assert!(dto.instructor);
        assert!(!dto.client);
    }

    #[test]
    fn test_register_dto_validation() {
        let dto = RegisterRequestDto {
            username: "jo".to_string(),
            password: "password123".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            client: true,
            instructor: false,
        };
        assert!(dto.validate().is_err());

        let dto = RegisterRequestDto {
            username: "jody".to_string(),
            password: "short".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            client: true,
            instructor: false,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_request_validation() {
        let ok = LoginRequest {
            username: "jane".to_string(),
            password: "password123".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = LoginRequest {
            username: "".to_string(),
            password: "password123".to_string(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_claims_roundtrip() {
        let claims = Claims {
            sub: "7".to_string(),
            instructor: true,
            client: false,
            exp: 9999999999,
            iat: 1234567890,
        };
        let json = serde_json::to_string(&claims).unwrap();
        let back: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(back.sub, "7");
        assert!(back.instructor);
        assert!(!back.client);
    }
}
