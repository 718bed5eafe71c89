//! Transaction Service - entry point.
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Open the transactions file store
//! 3. Build the user service client
//! 4. Build HTTP router
//! 5. Start server on configured port
//!
//! The user service does not need to be up at startup; until it is,
//! single-transaction responses just come without `user`.

use std::sync::Arc;

use ledger_services::{
    clients::HttpUserDirectory, config::TransactionServiceConfig,
    models::transaction::Transaction, routes, state::TransactionState, store::JsonFileStore,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = TransactionServiceConfig::from_env()?;
    tracing::info!(
        transactions_file = %config.transactions_file,
        user_service_url = %config.user_service_url,
        missing_date_policy = ?config.missing_date_policy,
        "Configuration loaded"
    );

    // The transactions file is created on the first write
    let transactions = JsonFileStore::<Transaction>::new(&config.transactions_file);
    // Fails only on an unparsable USER_SERVICE_URL, not on an unreachable one
    let user_directory =
        HttpUserDirectory::new(&config.user_service_url, config.user_service_timeout())?;

    let state = TransactionState::new(
        Arc::new(transactions),
        Arc::new(user_directory),
        config.missing_date_policy,
    );
    // Share store, user client and date policy with all handlers via State extraction
    let app = routes::transaction_router(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Transaction service listening on {}", addr);

    // Handles requests concurrently until the process is stopped
    axum::serve(listener, app).await?;

    Ok(())
}
