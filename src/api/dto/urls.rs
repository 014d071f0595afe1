//! DTOs for the short link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;

/// Request to shorten a long URL.
///
/// The URL is accepted as-is; malformed strings are hashed like any other
/// input (no format validation, matching the code generator's contract).
#[derive(Debug, Deserialize)]
pub struct CreateUrlRequest {
    pub long_url: String,
}

/// A stored short link.
#[derive(Debug, Serialize)]
pub struct ShortLinkResponse {
    pub code: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: String,
}

impl From<ShortLink> for ShortLinkResponse {
    fn from(link: ShortLink) -> Self {
        Self {
            code: link.code,
            long_url: link.long_url,
            created_at: link.created_at,
            owner_id: link.owner_id,
        }
    }
}
