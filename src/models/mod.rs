//! Data models for both services.
//!
//! This module contains the persisted records and the request/response
//! bodies built around them.

/// User records and create payloads
pub mod user;
/// Transaction records, create payloads and the enriched read model
pub mod transaction;
