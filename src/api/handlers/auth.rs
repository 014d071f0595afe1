//! Handlers for the authentication endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{
    LoginRequest, RefreshRequest, RegisterRequest, TokenResponse, UserResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Errors
///
/// Returns 400 with `duplicate_identity` if the email is already in use;
/// 400 with `validation_error` on a malformed email or too-short password.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Authenticates a user and returns an access/refresh token pair.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 401 for both unknown email and wrong password; the response
/// never discloses which.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let pair = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(pair.into()))
}

/// Exchanges a refresh token for a brand-new token pair.
///
/// # Endpoint
///
/// `POST /auth/refresh`
///
/// # Errors
///
/// Returns 401 if the refresh token is invalid, expired, of the wrong
/// kind, or its subject no longer exists.
pub async fn refresh_handler(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let pair = state.auth_service.refresh(&payload.refresh_token).await?;

    Ok(Json(pair.into()))
}
