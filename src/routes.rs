//! Top-level router composition.
//!
//! # Route Structure
//!
//! - `/auth/*`        - Registration, login, token refresh (public)
//! - `/urls/{key}`    - Link listing / redirect (GET public, POST gated)
//! - `/health`        - Liveness check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, matching the browser frontend's needs
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api::routes::api_router(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
