//! Transaction HTTP handlers.
//!
//! This module implements the transaction service endpoints:
//! - GET /transactions - List all transactions
//! - GET /transactions/{id} - Get transaction details with its user
//! - POST /transactions - Create new transaction

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    error::AppError,
    models::transaction::{CreateTransactionRequest, Transaction, TransactionWithUser},
    services::transaction_service,
    state::TransactionState,
};

/// List all transactions in creation order.
pub async fn list_transactions(State(state): State<TransactionState>) -> Json<Vec<Transaction>> {
    Json(transaction_service::list_transactions(state.transactions.as_ref()).await)
}

/// Get transaction by ID.
///
/// # Response (200)
///
/// ```json
/// {
///   "id": 1,
///   "amount": 50.0,
///   "category": "food",
///   "description": "",
///   "type": "expense",
///   "date": "2024-01-15",
///   "userId": 1,
///   "user": { "id": 1, "name": "Ana", "email": "ana@x.com" }
/// }
/// ```
///
/// `user` is left out when the user service is down, slow, or does not know
/// the user. That never turns into an error response.
pub async fn get_transaction(
    State(state): State<TransactionState>,
    transaction_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<TransactionWithUser>, AppError> {
    // Reject non-integer ids before touching storage
    let Path(transaction_id) = transaction_id?;

    // Find the transaction and try to attach its owner from the user service
    let transaction = transaction_service::get_transaction(
        state.transactions.as_ref(),
        state.user_directory.as_ref(),
        transaction_id,
    )
    .await?;

    Ok(Json(transaction))
}

/// Create a new transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 50,
///   "category": "food",
///   "description": "lunch",
///   "type": "expense",
///   "date": "2024-02-01",
///   "userId": 1
/// }
/// ```
///
/// `description` and `date` are optional.
pub async fn create_transaction(
    State(state): State<TransactionState>,
    request: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<Json<Transaction>, AppError> {
    // Malformed body -> 422
    let Json(request) = request?;

    // Resolve optional fields, assign next id and persist
    let transaction = transaction_service::create_transaction(
        state.transactions.as_ref(),
        request,
        state.missing_date,
    )
    .await?;

    Ok(Json(transaction))
}
