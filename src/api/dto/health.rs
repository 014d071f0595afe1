//! DTO for the health check endpoint.

use serde::Serialize;

/// Service health summary.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
