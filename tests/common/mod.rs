#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::{Value, json};

use shortify::api::routes::api_router;
use shortify::application::services::{AuthService, LinkService, TokenService};
use shortify::domain::entities::{NewShortLink, NewUser, ShortLink, User};
use shortify::domain::repositories::{LinkRepository, UserRepository};
use shortify::error::AppError;
use shortify::state::AppState;

pub const TEST_SECRET: &str = "test-signing-secret";

// Minimum bcrypt cost keeps the test suite fast.
const TEST_BCRYPT_COST: u32 = 4;

/// In-memory user store keyed by id, mirroring the `users` table contract
/// (unique id, unique email).
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();

        if users.values().any(|u| u.email == new_user.email) {
            return Err(AppError::duplicate_identity(
                "Unique constraint violation",
                json!({ "constraint": "users_email_key" }),
            ));
        }

        let user = User {
            id: new_user.id,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }
}

/// In-memory link store keyed by code. Insertion is first-writer-wins,
/// like `INSERT ... ON CONFLICT (code) DO NOTHING`.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<HashMap<String, ShortLink>>,
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert_if_absent(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.lock().unwrap();

        let link = links
            .entry(new_link.code.clone())
            .or_insert_with(|| ShortLink {
                code: new_link.code,
                long_url: new_link.long_url,
                created_at: Utc::now(),
                owner_id: new_link.owner_id,
            });

        Ok(link.clone())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.links.lock().unwrap();
        Ok(links.get(code).cloned())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.lock().unwrap();

        let mut owned: Vec<ShortLink> = links
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

/// Builds application state over fresh in-memory stores.
pub fn create_test_state() -> AppState {
    let users = Arc::new(InMemoryUserRepository::default());
    let links = Arc::new(InMemoryLinkRepository::default());

    let token_service = Arc::new(TokenService::new(TEST_SECRET));
    let auth_service = Arc::new(AuthService::new(
        users,
        token_service.clone(),
        TEST_BCRYPT_COST,
    ));
    let link_service = Arc::new(LinkService::new(links, 6));

    AppState::new(auth_service, link_service, token_service)
}

/// Spins up a test server over the full API router.
pub fn create_test_server() -> TestServer {
    TestServer::new(api_router(create_test_state())).unwrap()
}

/// Registers a user and returns the response body `{id, email}`.
pub async fn register_user(server: &TestServer, email: &str, password: &str) -> Value {
    let response = server
        .post("/auth/register")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}

/// Logs a user in and returns `(access_token, refresh_token)`.
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> (String, String) {
    let response = server
        .post("/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();

    (
        body["access_token"].as_str().unwrap().to_string(),
        body["refresh_token"].as_str().unwrap().to_string(),
    )
}
