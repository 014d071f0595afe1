//! Application error taxonomy and HTTP response mapping.
//!
//! Errors carry a human-readable message plus a JSON `details` payload and
//! map onto transport-level status codes in [`IntoResponse`]. Credential
//! and token failures are deliberately unspecific: the response never
//! discloses whether the email or password was wrong, nor which token
//! check failed.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request input.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Registration attempted with an email that already exists.
    #[error("{message}")]
    DuplicateIdentity { message: String, details: Value },

    /// Invalid credentials or an invalid/expired/mismatched token.
    /// Intentionally collapsed into one outcome.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// Unknown short code or missing record.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// Persistence or other infrastructure failure.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn duplicate_identity(message: impl Into<String>, details: Value) -> Self {
        Self::DuplicateIdentity {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::DuplicateIdentity { message, details } => (
                StatusCode::BAD_REQUEST,
                "duplicate_identity",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        if status == StatusCode::UNAUTHORIZED {
            // RFC 6750: challenge header on 401 responses.
            (
                status,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(body),
            )
                .into_response()
        } else {
            (status, Json(body)).into_response()
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::duplicate_identity(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!("database error: {e}");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::bad_request(
            "Invalid request payload",
            serde_json::to_value(&e).unwrap_or_else(|_| json!({})),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                AppError::bad_request("bad", json!({})).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::duplicate_identity("dup", json!({})).into_response(),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::unauthorized("no", json!({})).into_response(),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::not_found("gone", json!({})).into_response(),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::internal("boom", json!({})).into_response(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (response, expected) in cases {
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_unauthorized_carries_challenge_header() {
        let response = AppError::unauthorized("no", json!({})).into_response();

        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::not_found("Short link not found", json!({"code": "abc"}));
        assert_eq!(err.to_string(), "Short link not found");
    }
}
