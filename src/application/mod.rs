//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, hashing, and token issuance. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::token_service::TokenService`] - JWT issuance and verification
//! - [`services::auth_service::AuthService`] - Registration, login, refresh
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
