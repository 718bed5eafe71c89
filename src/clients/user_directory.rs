//! User lookups for the transaction service.
//!
//! Fetching a transaction embeds its owner when the user service can provide
//! it. The lookup is best-effort: any failure yields
//! [`UserLookup::Degraded`] and the transaction is returned without its user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::models::user::User;

/// Outcome of a single user lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum UserLookup {
    /// The user service answered 200 with a user.
    Found(User),

    /// No user available; the caller carries on without one.
    Degraded(DegradeReason),
}

/// Why a lookup produced no user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DegradeReason {
    /// Connection refused, DNS failure, timeout, ...
    #[error("user service unreachable: {0}")]
    Unreachable(String),

    /// The user service answered with something other than 200 (including 404).
    #[error("user service answered {0}")]
    Status(StatusCode),

    /// The body of a 200 answer was not a user.
    #[error("user service sent an unexpected body: {0}")]
    Decode(String),
}

/// Source of users for enrichment.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up one user. Makes a single attempt and never fails.
    async fn fetch_user(&self, user_id: i64) -> UserLookup;
}

/// Errors raised while building an [`HttpUserDirectory`].
#[derive(Debug, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("Invalid user service URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// [`UserDirectory`] backed by the user service's `GET /users/{id}`.
///
/// # Timeout
///
/// Every lookup is bounded by the timeout given at construction, so a slow
/// user service delays a transaction fetch by at most that much.
#[derive(Debug, Clone)]
pub struct HttpUserDirectory {
    client: Client,
    base_url: Url,
}

impl HttpUserDirectory {
    /// Build a directory for the user service at `base_url`.
    ///
    /// A path on the base URL is kept: `http://host/api` looks users up at
    /// `http://host/api/users/{id}`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UserDirectoryError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn user_url(&self, user_id: i64) -> Result<Url, url::ParseError> {
        self.base_url.join(&format!("users/{user_id}"))
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn fetch_user(&self, user_id: i64) -> UserLookup {
        let url = match self.user_url(user_id) {
            Ok(url) => url,
            Err(e) => return UserLookup::Degraded(DegradeReason::Unreachable(e.to_string())),
        };

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return UserLookup::Degraded(DegradeReason::Unreachable(e.to_string())),
        };

        if response.status() != StatusCode::OK {
            return UserLookup::Degraded(DegradeReason::Status(response.status()));
        }

        match response.json::<User>().await {
            Ok(user) => UserLookup::Found(user),
            Err(e) => UserLookup::Degraded(DegradeReason::Decode(e.to_string())),
        }
    }
}
