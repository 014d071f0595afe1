//! Core business data structures.

pub mod link;
pub mod user;

pub use link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
