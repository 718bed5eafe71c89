//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: record stored in the transactions file
//! - `CreateTransactionRequest`: request body for creating transactions
//! - `TransactionWithUser`: single-transaction response with its owner embedded
//! - `MissingDatePolicy`: what date a transaction gets when none is sent

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{models::user::User, store::Record};

/// Date stored when a transaction is created without one and the
/// [`MissingDatePolicy::Placeholder`] policy is active.
pub const PLACEHOLDER_DATE: &str = "2024-01-15";

/// Represents a transaction record from the transactions file.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "amount": 50.0,
///   "category": "food",
///   "description": "",
///   "type": "expense",
///   "date": "2024-01-15",
///   "userId": 1
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the store
    pub id: i64,

    pub amount: f64,

    pub category: String,

    /// Free text, empty when not provided
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Conventionally "income" or "expense"
    ///
    /// Not validated; any string is accepted and stored as-is.
    #[serde(rename = "type")]
    pub kind: String,

    pub date: String,

    /// Owner of the transaction
    ///
    /// Not checked against the user service: a transaction may point at a
    /// user that does not exist.
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Request body for creating a new transaction.
///
/// # JSON Example
///
/// ```json
/// {
///   "amount": 50,
///   "category": "food",
///   "type": "expense",
///   "userId": 1
/// }
/// ```
///
/// # Defaults
///
/// - `description`: empty string when missing or null
/// - `date`: resolved by the service's [`MissingDatePolicy`] when missing or null
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub amount: f64,

    pub category: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// A transaction with all defaults resolved that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub amount: f64,
    pub category: String,
    pub description: String,
    pub kind: String,
    pub date: String,
    pub user_id: i64,
}

impl CreateTransactionRequest {
    /// Fill in the optional fields.
    pub fn into_draft(self, missing_date: MissingDatePolicy) -> TransactionDraft {
        TransactionDraft {
            amount: self.amount,
            category: self.category,
            description: self.description.unwrap_or_default(),
            kind: self.kind,
            date: self.date.unwrap_or_else(|| missing_date.date()),
            user_id: self.user_id,
        }
    }
}

impl Record for Transaction {
    type Draft = TransactionDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: TransactionDraft) -> Self {
        Self {
            id,
            amount: draft.amount,
            category: draft.category,
            description: draft.description,
            kind: draft.kind,
            date: draft.date,
            user_id: draft.user_id,
        }
    }
}

/// Response for fetching a single transaction.
///
/// `user` holds the owner as returned by the user service. It is filled in
/// at read time only, never persisted, and left out of the JSON body when the
/// user service could not provide it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionWithUser {
    #[serde(flatten)]
    pub transaction: Transaction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Date assigned to transactions created without one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDatePolicy {
    /// Always [`PLACEHOLDER_DATE`]
    #[default]
    Placeholder,

    /// Current UTC date as `YYYY-MM-DD`
    Today,
}

impl MissingDatePolicy {
    pub fn date(self) -> String {
        match self {
            MissingDatePolicy::Placeholder => PLACEHOLDER_DATE.to_string(),
            MissingDatePolicy::Today => Utc::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
