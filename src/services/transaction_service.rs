//! Transaction service - business logic for the transactions collection.
//!
//! This service handles:
//! - Listing and creating transactions
//! - Resolving optional fields on create
//! - Enriching a fetched transaction with its owner from the user service
//!
//! # Enrichment
//!
//! Only [`get_transaction`] talks to the user service. The lookup is a single
//! best-effort attempt: when it degrades the transaction is still returned,
//! just without `user`.

use crate::{
    clients::{UserDirectory, UserLookup},
    error::AppError,
    models::transaction::{
        CreateTransactionRequest, MissingDatePolicy, Transaction, TransactionWithUser,
    },
    store::RecordStore,
};

/// All transactions in creation order.
pub async fn list_transactions(store: &dyn RecordStore<Transaction>) -> Vec<Transaction> {
    store.list().await
}

/// Get transaction by ID, with its owner embedded when available.
///
/// # Process
///
/// 1. Find the transaction (404 if absent)
/// 2. Ask the user directory for `userId`
/// 3. Embed the user on success, leave it out otherwise
///
/// # Errors
///
/// - `TransactionNotFound`: no transaction has this id
pub async fn get_transaction(
    store: &dyn RecordStore<Transaction>,
    users: &dyn UserDirectory,
    transaction_id: i64,
) -> Result<TransactionWithUser, AppError> {
    let transaction = store
        .get(transaction_id)
        .await
        .ok_or(AppError::TransactionNotFound)?;

    // Best-effort: a degraded lookup only drops the user field
    let user = match users.fetch_user(transaction.user_id).await {
        UserLookup::Found(user) => Some(user),
        UserLookup::Degraded(reason) => {
            tracing::warn!(
                transaction_id,
                user_id = transaction.user_id,
                "Returning transaction without user: {reason}"
            );
            None
        }
    };

    Ok(TransactionWithUser { transaction, user })
}

/// Create a transaction with the next free id and persist it.
///
/// # Defaults
///
/// - Missing description → `""`
/// - Missing date → decided by `missing_date`
///
/// `type` and `userId` are stored as given.
pub async fn create_transaction(
    store: &dyn RecordStore<Transaction>,
    request: CreateTransactionRequest,
    missing_date: MissingDatePolicy,
) -> Result<Transaction, AppError> {
    let transaction = store.insert(request.into_draft(missing_date)).await?;
    tracing::info!(
        transaction_id = transaction.id,
        user_id = transaction.user_id,
        "Transaction created"
    );
    Ok(transaction)
}
