//! Password hashing and verification.
//!
//! Uses bcrypt, which embeds a fresh random salt in every digest: hashing
//! the same password twice yields two different strings, both of which
//! verify against the original password.

use crate::error::AppError;
use serde_json::json;

/// Hashes a plaintext password with bcrypt at the given cost factor.
///
/// The plaintext is not retained past this call.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if bcrypt fails (e.g. invalid cost).
pub fn hash(password: &str, cost: u32) -> Result<String, AppError> {
    bcrypt::hash(password, cost).map_err(|e| {
        tracing::error!("bcrypt hash failed: {e}");
        AppError::internal("Failed to hash password", json!({}))
    })
}

/// Verifies a plaintext password against a stored bcrypt digest.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the stored digest is not a valid
/// bcrypt string.
pub fn verify(password: &str, digest: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, digest).map_err(|e| {
        tracing::error!("bcrypt verify failed: {e}");
        AppError::internal("Failed to verify password", json!({}))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost keeps the tests fast.
    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_embeds_fresh_salt() {
        let first = hash("hunter2", TEST_COST).unwrap();
        let second = hash("hunter2", TEST_COST).unwrap();

        assert_ne!(first, second);
        assert!(verify("hunter2", &first).unwrap());
        assert!(verify("hunter2", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let digest = hash("correct horse", TEST_COST).unwrap();

        assert!(!verify("battery staple", &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        assert!(verify("anything", "not-a-bcrypt-digest").is_err());
    }
}
