//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AuthService, LinkService, TokenService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Duration;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with startup retry)
/// - Migrations
/// - Repositories and services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after all retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let token_service = Arc::new(TokenService::with_ttls(
        &config.token_signing_secret,
        Duration::minutes(config.access_token_ttl_minutes),
        Duration::days(config.refresh_token_ttl_days),
    ));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service.clone(),
        config.bcrypt_cost,
    ));

    let link_service = Arc::new(LinkService::new(link_repository, config.code_length));

    let state = AppState::new(auth_service, link_service, token_service);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Connects to PostgreSQL, retrying with exponential backoff.
///
/// Transient unavailability at startup (e.g. the database container still
/// booting) is retried; after the last attempt the error propagates and
/// startup fails.
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(100).map(jitter).take(5);

    let pool = Retry::spawn(strategy, || async {
        PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.db_connect_timeout))
            .idle_timeout(std::time::Duration::from_secs(config.db_idle_timeout))
            .max_lifetime(std::time::Duration::from_secs(config.db_max_lifetime))
            .connect(&config.database_url)
            .await
            .inspect_err(|e| tracing::warn!("Database connection failed, retrying: {e}"))
    })
    .await?;

    Ok(pool)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install shutdown signal handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
