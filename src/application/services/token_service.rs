//! Stateless JWT issuance and verification.
//!
//! Tokens are self-contained HS256 JWTs signed with a process-wide secret.
//! Two kinds coexist: short-lived access tokens (carrying the subject's
//! email) and long-lived refresh tokens. A token of one kind is never
//! accepted where the other is expected.
//!
//! There is no revocation state: a token moves from valid to expired by
//! wall-clock comparison alone. In particular an old refresh token remains
//! valid until its own expiry even after being used to mint a new pair.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Access token lifetime.
pub const ACCESS_TOKEN_TTL_MINUTES: i64 = 30;

/// Refresh token lifetime.
pub const REFRESH_TOKEN_TTL_DAYS: i64 = 7;

/// Discriminates access tokens from refresh tokens.
///
/// Serialized into the `type` claim; verification requires an exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT payload for both token kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Owning user id.
    pub sub: String,
    /// Present on access tokens only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Expiry as a Unix timestamp, strictly in the future at issuance.
    pub exp: i64,
    #[serde(rename = "type")]
    pub kind: TokenKind,
}

/// A freshly issued access/refresh token pair.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Issues and verifies signed, time-bounded tokens.
///
/// Holds the shared signing secret; the secret is immutable after load and
/// never logged or returned in any response.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    /// Creates a token service with the default lifetimes (30 minutes
    /// access, 7 days refresh).
    pub fn new(secret: &str) -> Self {
        Self::with_ttls(
            secret,
            Duration::minutes(ACCESS_TOKEN_TTL_MINUTES),
            Duration::days(REFRESH_TOKEN_TTL_DAYS),
        )
    }

    /// Creates a token service with explicit lifetimes.
    pub fn with_ttls(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Issues an access token carrying the subject id and email.
    pub fn issue_access(&self, subject: &str, email: &str) -> Result<String, AppError> {
        self.sign(Claims {
            sub: subject.to_string(),
            email: Some(email.to_string()),
            exp: (Utc::now() + self.access_ttl).timestamp(),
            kind: TokenKind::Access,
        })
    }

    /// Issues a refresh token carrying only the subject id.
    pub fn issue_refresh(&self, subject: &str) -> Result<String, AppError> {
        self.sign(Claims {
            sub: subject.to_string(),
            email: None,
            exp: (Utc::now() + self.refresh_ttl).timestamp(),
            kind: TokenKind::Refresh,
        })
    }

    /// Issues a brand-new access/refresh pair for a subject.
    pub fn issue_pair(&self, subject: &str, email: &str) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access(subject, email)?,
            refresh_token: self.issue_refresh(subject)?,
        })
    }

    /// Verifies signature, expiry, and kind; returns the decoded claims.
    ///
    /// # Errors
    ///
    /// Signature mismatch, expiry, kind mismatch, and malformed token
    /// structure all collapse into the same [`AppError::Unauthorized`]
    /// outcome. The distinction is logged at debug level but never exposed
    /// to the caller.
    pub fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("token rejected: {e}");
            invalid_token()
        })?;

        if data.claims.kind != expected_kind {
            tracing::debug!(
                "token rejected: kind mismatch (got {:?}, expected {:?})",
                data.claims.kind,
                expected_kind
            );
            return Err(invalid_token());
        }

        Ok(data.claims)
    }

    /// Signs the claims into an HS256 JWT with the shared secret.
    fn sign(&self, claims: Claims) -> Result<String, AppError> {
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::debug!("token signing failed: {e}");
            AppError::internal("Failed to sign token", json!({}))
        })
    }
}

fn invalid_token() -> AppError {
    AppError::unauthorized("Invalid or expired token", json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-signing-secret")
    }

    #[test]
    fn test_access_token_round_trip() {
        let svc = service();
        let token = svc.issue_access("user-1", "user@example.com").unwrap();

        let claims = svc.verify(&token, TokenKind::Access).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.email.as_deref(), Some("user@example.com"));
        assert_eq!(claims.kind, TokenKind::Access);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_refresh_token_omits_email() {
        let svc = service();
        let token = svc.issue_refresh("user-1").unwrap();

        let claims = svc.verify(&token, TokenKind::Refresh).unwrap();

        assert_eq!(claims.sub, "user-1");
        assert!(claims.email.is_none());
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let svc = service();

        let access = svc.issue_access("user-1", "user@example.com").unwrap();
        let refresh = svc.issue_refresh("user-1").unwrap();

        assert!(matches!(
            svc.verify(&access, TokenKind::Refresh),
            Err(AppError::Unauthorized { .. })
        ));
        assert!(matches!(
            svc.verify(&refresh, TokenKind::Access),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL mints a token whose expiry is already in the past,
        // with a perfectly valid signature.
        let svc = TokenService::with_ttls(
            "test-signing-secret",
            Duration::seconds(-60),
            Duration::seconds(-60),
        );

        let token = svc.issue_access("user-1", "user@example.com").unwrap();

        assert!(matches!(
            svc.verify(&token, TokenKind::Access),
            Err(AppError::Unauthorized { .. })
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = service().issue_access("user-1", "user@example.com").unwrap();
        let other = TokenService::new("a-different-secret");

        assert!(other.verify(&token, TokenKind::Access).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let svc = service();

        for garbage in ["", "not-a-jwt", "a.b.c", "e30.e30."] {
            assert!(matches!(
                svc.verify(garbage, TokenKind::Access),
                Err(AppError::Unauthorized { .. })
            ));
        }
    }

    #[test]
    fn test_refresh_pair_is_fresh_but_old_token_still_verifies() {
        let svc = service();

        let old_refresh = svc.issue_refresh("user-1").unwrap();
        let pair = svc.issue_pair("user-1", "user@example.com").unwrap();

        // No revocation list: the old refresh token remains independently
        // valid until its own expiry.
        assert!(svc.verify(&old_refresh, TokenKind::Refresh).is_ok());
        assert!(svc.verify(&pair.access_token, TokenKind::Access).is_ok());
        assert!(svc.verify(&pair.refresh_token, TokenKind::Refresh).is_ok());
    }
}
