//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService, TokenService};

/// Application-wide shared state.
///
/// Constructed once at startup and cloned into every handler. All fields
/// are read-only after construction; there is no shared mutable in-process
/// state beyond the pooled store connections inside the services.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub link_service: Arc<LinkService>,
    pub token_service: Arc<TokenService>,
}

impl AppState {
    /// Creates the application state from constructed services.
    pub fn new(
        auth_service: Arc<AuthService>,
        link_service: Arc<LinkService>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            link_service,
            token_service,
        }
    }
}
