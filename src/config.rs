//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.
//! Each service binary has its own config struct.

use serde::Deserialize;

use crate::models::transaction::MissingDatePolicy;

/// User service configuration.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8001
/// - `USERS_FILE` (optional): path of the users JSON file, defaults to `users.json`
#[derive(Debug, Clone, Deserialize)]
pub struct UserServiceConfig {
    #[serde(default = "default_user_port")]
    pub server_port: u16,

    #[serde(default = "default_users_file")]
    pub users_file: String,
}

/// Transaction service configuration.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3002
/// - `TRANSACTIONS_FILE` (optional): path of the transactions JSON file, defaults to `transactions.json`
/// - `USER_SERVICE_URL` (optional): base URL of the user service, defaults to `http://localhost:8001`
/// - `USER_SERVICE_TIMEOUT_MS` (optional): timeout for user lookups, defaults to 2000
/// - `MISSING_DATE_POLICY` (optional): `placeholder` or `today`, defaults to `placeholder`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionServiceConfig {
    #[serde(default = "default_transaction_port")]
    pub server_port: u16,

    #[serde(default = "default_transactions_file")]
    pub transactions_file: String,

    #[serde(default = "default_user_service_url")]
    pub user_service_url: String,

    #[serde(default = "default_user_service_timeout_ms")]
    pub user_service_timeout_ms: u64,

    #[serde(default)]
    pub missing_date_policy: MissingDatePolicy,
}

fn default_user_port() -> u16 {
    8001
}

fn default_users_file() -> String {
    "users.json".to_string()
}

fn default_transaction_port() -> u16 {
    3002
}

fn default_transactions_file() -> String {
    "transactions.json".to_string()
}

fn default_user_service_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_user_service_timeout_ms() -> u64 {
    2000
}

impl UserServiceConfig {
    /// Load configuration from `.env` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed (e.g. a non-numeric port).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }
}

impl TransactionServiceConfig {
    /// Load configuration from `.env` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed (e.g. an
    /// unknown `MISSING_DATE_POLICY`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env::<Self>()
    }

    pub fn user_service_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.user_service_timeout_ms)
    }
}
