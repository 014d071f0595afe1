//! API route configuration.

use crate::api::handlers::{
    create_url_handler, health_handler, login_handler, refresh_handler, register_handler,
    urls_lookup_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /auth/register`  - Create a user account (public)
/// - `POST /auth/login`     - Issue an access/refresh token pair (public)
/// - `POST /auth/refresh`   - Exchange a refresh token for a new pair (public)
/// - `GET  /urls/{key}`     - List a user's links (UUID key) or redirect a
///   short code (public)
/// - `POST /urls/{user_id}` - Shorten a URL (Bearer access token required,
///   enforced by the [`crate::api::middleware::CurrentUser`] extractor)
/// - `GET  /health`         - Liveness check (public)
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/refresh", post(refresh_handler))
        .route(
            "/urls/{key}",
            get(urls_lookup_handler).post(create_url_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
}
