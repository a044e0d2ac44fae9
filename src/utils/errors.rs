use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application error carrying an HTTP status and the field name used for
/// the JSON body. Auth rejections historically answer with a `message`
/// field while everything else answers with `error`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    key: &'static str,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            key: "error",
        }
    }

    fn with_message_body(status: StatusCode, err: impl Into<Error>) -> Self {
        Self {
            status,
            error: err.into(),
            key: "message",
        }
    }

    /// No credential was presented at all.
    pub fn unauthenticated<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// A credential was presented but did not verify.
    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::with_message_body(StatusCode::UNAUTHORIZED, err)
    }

    /// A valid credential lacks the claim a route requires. Answered with
    /// 401 rather than 403, matching the API's published behavior.
    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::with_message_body(StatusCode::UNAUTHORIZED, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unprocessable<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, err)
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.error.to_string();
        let body = match self.key {
            "message" => Json(json!({ "message": detail })),
            _ => Json(json!({ "error": detail })),
        };

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
