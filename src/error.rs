// HTTP API Error Types
use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::auth::AuthError;
use crate::database::DatabaseError;

/// Field name -> problem, reported alongside 422 responses
pub type FieldErrors = BTreeMap<String, String>;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 / 400 / 403 raised by the token pipeline
    Auth(AuthError),

    // 404 Not Found
    NotFound(String),

    // 405 Method Not Allowed
    MethodNotAllowed,

    // 422 Unprocessable Entity
    Unprocessable {
        message: String,
        field_errors: Option<FieldErrors>,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(err) => err.status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Auth(err) => &err.description,
            ApiError::NotFound(msg) => msg,
            ApiError::MethodNotAllowed => "method not allowed",
            ApiError::Unprocessable { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        let mut body = json!({
            "success": false,
            "error": self.status_code().as_u16(),
            "message": self.message(),
        });

        match self {
            ApiError::Auth(err) => {
                body["code"] = json!(err.code);
            }
            ApiError::Unprocessable {
                field_errors: Some(field_errors),
                ..
            } => {
                body["field_errors"] = json!(field_errors);
            }
            _ => {}
        }

        body
    }
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        ApiError::Unprocessable {
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn validation(field_errors: FieldErrors) -> Self {
        ApiError::Unprocessable {
            message: "unprocessable".to_string(),
            field_errors: Some(field_errors),
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }

    /// Default 404 body used for missing rows and unknown routes
    pub fn resource_not_found() -> Self {
        Self::not_found("resource not found")
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        if err.status.is_server_error() {
            return ApiError::service_unavailable(err.description);
        }
        ApiError::Auth(err)
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => ApiError::resource_not_found(),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                // unique_violation
                Some("23505") => ApiError::unprocessable(format!(
                    "duplicate value violates {}",
                    db_err.constraint().unwrap_or("a unique constraint")
                )),
                // foreign_key_violation
                Some("23503") => ApiError::unprocessable("referenced record does not exist"),
                _ => {
                    tracing::error!(error = %db_err, "Database error");
                    ApiError::internal_server_error("internal server error")
                }
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
                tracing::error!(error = %err, "Database unreachable");
                ApiError::service_unavailable("database temporarily unavailable")
            }
            _ => {
                tracing::error!(error = %err, "SQLx error");
                ApiError::internal_server_error("internal server error")
            }
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Sqlx(e) => e.into(),
            other => {
                tracing::error!(error = %other, "Database setup error");
                ApiError::service_unavailable("database temporarily unavailable")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // Well-formed JSON whose shape does not match the expected body
            JsonRejection::JsonDataError(e) => ApiError::unprocessable(e.body_text()),
            other => ApiError::bad_request(other.body_text()),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_has_envelope_fields() {
        let body = ApiError::resource_not_found().to_json();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], 404);
        assert_eq!(body["message"], "resource not found");
    }

    #[test]
    fn auth_errors_carry_code() {
        let err: ApiError = AuthError::expired().into();
        let body = err.to_json();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "token_expired");
        assert_eq!(body["message"], "Token expired.");
    }

    #[test]
    fn key_fetch_failure_is_service_unavailable() {
        let err: ApiError = AuthError::keys_unavailable().into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn validation_lists_fields() {
        let mut fields = FieldErrors::new();
        fields.insert("title".into(), "is required".into());
        let body = ApiError::validation(fields).to_json();
        assert_eq!(body["error"], 422);
        assert_eq!(body["field_errors"]["title"], "is required");
    }

    #[test]
    fn row_not_found_maps_to_404() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
