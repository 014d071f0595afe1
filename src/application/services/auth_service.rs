//! Registration, login, and token refresh orchestration.

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::application::services::token_service::{TokenKind, TokenPair, TokenService};
use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password;

/// Service for the account lifecycle: register, login, refresh.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    /// Registers a new user with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateIdentity`] if the email is already in
    /// use. The existing record is left untouched.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::duplicate_identity(
                "Email is already in use",
                json!({ "email": email }),
            ));
        }

        let password_hash = password::hash(password, self.bcrypt_cost)?;

        self.users
            .create(NewUser {
                id: Uuid::new_v4().to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await
    }

    /// Authenticates a user and issues an access/refresh token pair.
    ///
    /// # Errors
    ///
    /// Unknown email and wrong password return the identical
    /// [`AppError::Unauthorized`] error; the caller cannot tell which
    /// check failed.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenPair, AppError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !password::verify(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        self.tokens.issue_pair(&user.id, &user.email)
    }

    /// Exchanges a valid refresh token for a brand-new token pair.
    ///
    /// The subject is re-resolved against the user store to confirm the
    /// identity still exists. The presented refresh token is not revoked:
    /// it stays valid until its own expiry, so concurrent refresh calls
    /// with the same token each succeed independently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is invalid, expired,
    /// not a refresh token, or the user no longer exists.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, AppError> {
        let claims = self.tokens.verify(refresh_token, TokenKind::Refresh)?;

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::unauthorized("User no longer exists", json!({})))?;

        self.tokens.issue_pair(&user.id, &user.email)
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials", json!({}))
}
