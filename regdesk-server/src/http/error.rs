//! API error types with IntoResponse
//!
//! Registration failures become JSON envelopes with status 400. Listing
//! failures become short plain-text bodies with status 500.

use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::db::DbError;
use crate::models::{Envelope, ValidationError};
use crate::view::TemplateError;

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const PASSWORD_MISMATCH: &str = "Password and confirm password do not match";
pub const INSERT_FAILED: &str = "Error inserting user data into the database";
pub const QUERY_FAILED: &str = "Error loading users";
pub const TEMPLATE_FAILED: &str = "Error rendering user list";

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body is unreadable or not a registration request (400)
    MalformedInput(String),

    /// Password confirmation differs (400)
    PasswordMismatch,

    /// Insert failed (400, logged)
    Insert(DbError),

    /// Listing query failed (500, logged)
    Query(DbError),

    /// Listing template missing or broken (500, logged)
    Template(TemplateError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::MalformedInput(e) => {
                tracing::debug!("Rejected registration body: {}", e);
                envelope(INVALID_JSON)
            }
            Self::PasswordMismatch => envelope(PASSWORD_MISMATCH),
            Self::Insert(e) => {
                tracing::error!("Insert error: {}", e);
                envelope(INSERT_FAILED)
            }
            Self::Query(e) => {
                tracing::error!("Query error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, QUERY_FAILED).into_response()
            }
            Self::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, TEMPLATE_FAILED).into_response()
            }
        }
    }
}

fn envelope(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(Envelope::bad_request(message))).into_response()
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        match e {
            ValidationError::PasswordMismatch => Self::PasswordMismatch,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::MalformedInput(e.to_string())
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        Self::MalformedInput(e.body_text())
    }
}

impl From<TemplateError> for ApiError {
    fn from(e: TemplateError) -> Self {
        Self::Template(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn mismatch_is_400_envelope() {
        let response = ApiError::from(ValidationError::PasswordMismatch).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "400", "message": PASSWORD_MISMATCH})
        );
    }

    #[tokio::test]
    async fn malformed_input_is_400() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains(INVALID_JSON));
    }

    #[tokio::test]
    async fn insert_failure_is_400() {
        let err = ApiError::Insert(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(response).await.contains(INSERT_FAILED));
    }

    #[tokio::test]
    async fn query_and_template_failures_are_500_with_distinct_text() {
        let query = ApiError::Query(DbError::Sqlx(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(query.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let query_body = body_string(query).await;

        let template = ApiError::Template(TemplateError::Load {
            path: "userList.html".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
        .into_response();
        assert_eq!(template.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let template_body = body_string(template).await;

        assert_eq!(query_body, QUERY_FAILED);
        assert_eq!(template_body, TEMPLATE_FAILED);
    }
}
