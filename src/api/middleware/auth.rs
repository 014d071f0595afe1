//! Bearer access-token authentication extractor.

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header, request::Parts},
};
use serde_json::json;

use crate::application::services::token_service::{Claims, TokenKind};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated caller extractor for protected endpoints.
///
/// Add this to handler parameters to require a valid Bearer *access*
/// token. Refresh tokens are rejected here even when their signature is
/// valid.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <access token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` (with a `WWW-Authenticate: Bearer` header)
/// if the Authorization header is missing or malformed, or the token fails
/// any verification check.
pub struct CurrentUser(pub Claims);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts.headers.get(header::AUTHORIZATION).ok_or_else(|| {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Authorization header is missing" }),
            )
        })?;

        let token = extract_bearer_token(header)?;

        let claims = state.token_service.verify(&token, TokenKind::Access)?;

        Ok(CurrentUser(claims))
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header value.
fn extract_bearer_token(header: &HeaderValue) -> Result<String, AppError> {
    let header_str = header.to_str().map_err(|_| invalid_header())?;

    header_str
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(invalid_header)
}

fn invalid_header() -> AppError {
    AppError::unauthorized(
        "Unauthorized",
        json!({ "reason": "Authorization header is invalid" }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");
    }

    #[test]
    fn test_extract_rejects_missing_scheme() {
        let header = HeaderValue::from_static("abc123");
        assert!(extract_bearer_token(&header).is_err());
    }

    #[test]
    fn test_extract_rejects_wrong_scheme() {
        let header = HeaderValue::from_static("Basic abc123");
        assert!(extract_bearer_token(&header).is_err());
    }
}
