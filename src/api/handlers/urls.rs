//! Handlers for short link creation, listing, and redirect.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::api::dto::urls::{CreateUrlRequest, ShortLinkResponse};
use crate::api::middleware::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a user, or returns the existing one.
///
/// # Endpoint
///
/// `POST /urls/{user_id}` (Bearer access token required)
///
/// Idempotent: re-shortening an already-shortened URL returns the stored
/// link with its original `code` and `created_at`, no new row.
pub async fn create_url_handler(
    State(state): State<AppState>,
    CurrentUser(_claims): CurrentUser,
    Path(user_id): Path<String>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<Json<ShortLinkResponse>, AppError> {
    let link = state
        .link_service
        .create_short_link(&user_id, payload.long_url)
        .await?;

    Ok(Json(link.into()))
}

/// Lists a user's links, or redirects a short code.
///
/// # Endpoint
///
/// `GET /urls/{key}`
///
/// Both lookups share one path, so the handler dispatches on the key's
/// shape: user ids are UUIDs, short codes are short base62 strings, and
/// the two can never be confused.
///
/// - `key` is a UUID: returns `200` with all links owned by that user.
/// - otherwise: resolves `key` as a short code and returns a `302`
///   redirect to the long URL, or `404` if the code was never created.
pub async fn urls_lookup_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, AppError> {
    if Uuid::parse_str(&key).is_ok() {
        let links = state.link_service.list_links(&key).await?;

        let body: Vec<ShortLinkResponse> = links.into_iter().map(Into::into).collect();
        return Ok(Json(body).into_response());
    }

    let link = state.link_service.resolve(&key).await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, link.long_url)]).into_response())
}
