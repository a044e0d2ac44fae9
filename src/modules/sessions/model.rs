use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

pub const SESSION_COLUMNS: &str = "id, class_id, date_time";

/// A scheduled occurrence of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Session {
    pub id: i32,
    pub class_id: i32,
    pub date_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSessionDto {
    #[validate(range(min = 1))]
    pub class_id: i32,
    pub date_time: DateTime<Utc>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateSessionDto {
    #[validate(range(min = 1))]
    pub class_id: Option<i32>,
    pub date_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dto_parses_rfc3339() {
        let json = r#"{"class_id":3,"date_time":"2026-09-01T18:30:00Z"}"#;
        let dto: CreateSessionDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.class_id, 3);
        assert_eq!(dto.date_time.to_rfc3339(), "2026-09-01T18:30:00+00:00");
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_dto_rejects_bad_timestamp() {
        let json = r#"{"class_id":3,"date_time":"next tuesday"}"#;
        assert!(serde_json::from_str::<CreateSessionDto>(json).is_err());
    }

    #[test]
    fn test_update_dto_partial() {
        let dto: UpdateSessionDto = serde_json::from_str(r#"{"class_id":5}"#).unwrap();
        assert_eq!(dto.class_id, Some(5));
        assert!(dto.date_time.is_none());
        assert!(dto.validate().is_ok());
    }
}
