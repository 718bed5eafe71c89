//! Business logic services.
//!
//! Services contain the logic separated from HTTP handlers. They work
//! against the [`crate::store::RecordStore`] and [`crate::clients::UserDirectory`]
//! traits, never against concrete files or HTTP clients.

pub mod transaction_service;
pub mod user_service;
