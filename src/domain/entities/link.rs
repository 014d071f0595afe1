//! Short link entity representing a code to URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping.
///
/// The code is the primary key and a deterministic function of `long_url`,
/// so the same URL always resolves to the same row regardless of who
/// shortened it. `owner_id` records the first creator only; later users who
/// shorten the identical URL receive the existing link. Rows are never
/// mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub long_url: String,
    pub owner_id: String,
}
