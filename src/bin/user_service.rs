//! User Service - entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Open the users file store
//! 3. Build HTTP router
//! 4. Start server on configured port

use std::sync::Arc;

use ledger_services::{
    config::UserServiceConfig, models::user::User, routes, state::UserState, store::JsonFileStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = UserServiceConfig::from_env()?;
    tracing::info!(users_file = %config.users_file, "Configuration loaded");

    // The users file is created on the first write
    let users = JsonFileStore::<User>::new(&config.users_file);

    // Build the router with request tracing
    let app = routes::user_router(UserState::new(Arc::new(users)));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("User service listening on {}", addr);

    // Handles requests concurrently until the process is stopped
    axum::serve(listener, app).await?;

    Ok(())
}
