//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx
//! runtime queries.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User account storage
//! - [`PgLinkRepository`] - Short link storage and retrieval

pub mod pg_link_repository;
pub mod pg_user_repository;

pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
