//! Clients for other services.

/// Lookups against the user service
pub mod user_directory;

pub use user_directory::{DegradeReason, HttpUserDirectory, UserDirectory, UserLookup};
