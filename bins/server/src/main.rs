//! RioCaja API Server
//!
//! Main entry point for the RioCaja backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use riocaja_api::{AppState, create_router};
use riocaja_db::{DbReceiptStore, UserRepository, connect_with_pool};
use riocaja_shared::{AppConfig, JwtConfig, TokenService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riocaja=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database
    let db = connect_with_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .context("Failed to connect to database")?;
    info!("Connected to database");

    // Create token service
    let jwt_config = JwtConfig::try_from(&config.jwt).context("Invalid JWT configuration")?;
    info!(
        algorithm = ?jwt_config.algorithm,
        expires_secs = jwt_config.access_token_expires_secs,
        "Token service configured"
    );

    // Create application state
    let state = AppState::new(
        Arc::new(UserRepository::new(db.clone())),
        Arc::new(DbReceiptStore::new(db)),
        TokenService::new(jwt_config),
    );

    // Create router
    let app = create_router(state, &config.api.prefix);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!(prefix = %config.api.prefix, "Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
