//! User and transaction store services.
//!
//! Two small REST services backed by flat JSON files:
//!
//! - **User service**: list, fetch and create users.
//! - **Transaction service**: list, fetch and create transactions. Fetching a
//!   single transaction also looks up its owner in the user service and embeds
//!   it in the response when the lookup succeeds.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: one JSON array file per collection, behind the [`store::RecordStore`] trait
//! - **Cross-service calls**: reqwest, behind the [`clients::UserDirectory`] trait
//! - **Format**: JSON requests/responses
//!
//! Each service has its own binary under `src/bin/`.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
