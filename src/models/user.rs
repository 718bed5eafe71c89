//! User data models and API request types.
//!
//! This module defines:
//! - `User`: record stored in the users file
//! - `CreateUserRequest`: request body for creating users

use serde::{Deserialize, Serialize};

use crate::store::Record;

/// Represents a user record from the users file.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": 1,
///   "name": "Ana",
///   "email": "ana@x.com"
/// }
/// ```
///
/// Users are only ever created; they are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned by the store
    pub id: i64,

    pub name: String,

    /// Email address
    ///
    /// Stored as given. Neither its format nor its uniqueness is checked.
    pub email: String,
}

/// Request body for creating a new user.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Ana",
///   "email": "ana@x.com"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// A user that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl From<CreateUserRequest> for UserDraft {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
        }
    }
}

impl Record for User {
    type Draft = UserDraft;

    fn id(&self) -> i64 {
        self.id
    }

    fn from_draft(id: i64, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }
}
