//! Shared state handed to the route handlers of each service.

use std::sync::Arc;

use crate::{
    clients::UserDirectory,
    models::{
        transaction::{MissingDatePolicy, Transaction},
        user::User,
    },
    store::RecordStore,
};

/// State of the user service.
#[derive(Clone)]
pub struct UserState {
    /// The users collection
    pub users: Arc<dyn RecordStore<User>>,
}

impl UserState {
    pub fn new(users: Arc<dyn RecordStore<User>>) -> Self {
        Self { users }
    }
}

/// State of the transaction service.
#[derive(Clone)]
pub struct TransactionState {
    /// The transactions collection
    pub transactions: Arc<dyn RecordStore<Transaction>>,
    /// Where owners are looked up when fetching a single transaction
    pub user_directory: Arc<dyn UserDirectory>,
    /// Date given to transactions created without one
    pub missing_date: MissingDatePolicy,
}

impl TransactionState {
    pub fn new(
        transactions: Arc<dyn RecordStore<Transaction>>,
        user_directory: Arc<dyn UserDirectory>,
        missing_date: MissingDatePolicy,
    ) -> Self {
        Self {
            transactions,
            user_directory,
            missing_date,
        }
    }
}
