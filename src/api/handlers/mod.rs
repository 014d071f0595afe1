//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod urls;

pub use auth::{login_handler, refresh_handler, register_handler};
pub use health::health_handler;
pub use urls::{create_url_handler, urls_lookup_handler};
