//! Short link creation, listing, and resolution.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::shorten;

/// Service for creating and resolving shortened links.
///
/// Codes are content-addressed: re-shortening a URL always lands on the
/// same code, so a second request for an already-shortened URL returns
/// the existing link unchanged, whoever owns it.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    code_length: usize,
}

impl LinkService {
    /// Creates a new link service generating codes of `code_length` chars.
    pub fn new(links: Arc<dyn LinkRepository>, code_length: usize) -> Self {
        Self { links, code_length }
    }

    /// Creates a short link, or returns the existing one for its code.
    ///
    /// The code is derived deterministically from `long_url`. If a row for
    /// that code already exists it is returned as-is — including the case
    /// where a *different* URL truncates to the same code: the first
    /// stored mapping wins silently and no new row is created.
    ///
    /// Concurrent requests for the same URL race safely: insertion is a
    /// single conditional write at the storage layer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_short_link(
        &self,
        owner_id: &str,
        long_url: String,
    ) -> Result<ShortLink, AppError> {
        let code = shorten(&long_url, self.code_length);

        if let Some(existing) = self.links.find_by_code(&code).await? {
            return Ok(existing);
        }

        self.links
            .insert_if_absent(NewShortLink {
                code,
                long_url,
                owner_id: owner_id.to_string(),
            })
            .await
    }

    /// Lists all links owned by a user, newest first.
    ///
    /// Ownership reflects the first creator only; a URL re-shortened by a
    /// second user does not appear in that user's listing.
    pub async fn list_links(&self, owner_id: &str) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_by_owner(owner_id).await
    }

    /// Resolves a short code to its stored link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }
}
