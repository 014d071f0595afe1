//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request
//! bodies that carry user input are validated with `validator`.

pub mod auth;
pub mod health;
pub mod urls;
