//! User HTTP handlers.
//!
//! This module implements the user service endpoints:
//! - GET /users - List all users
//! - GET /users/{id} - Get user by ID
//! - POST /users - Create new user

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, User},
    services::user_service,
    state::UserState,
};

/// List all users in creation order.
///
/// Always 200; an absent or corrupt users file lists as `[]`.
pub async fn list_users(State(state): State<UserState>) -> Json<Vec<User>> {
    Json(user_service::list_users(state.users.as_ref()).await)
}

/// Get user by ID.
///
/// # Response (404)
///
/// ```json
/// { "detail": "User not found" }
/// ```
pub async fn get_user(
    State(state): State<UserState>,
    user_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, AppError> {
    // Reject non-integer ids before touching storage
    let Path(user_id) = user_id?;

    // Linear scan of the users file, 404 if absent
    let user = user_service::get_user(state.users.as_ref(), user_id).await?;
    Ok(Json(user))
}

/// Create a new user.
///
/// # Request Body
///
/// ```json
/// { "name": "Ana", "email": "ana@x.com" }
/// ```
///
/// # Response (200)
///
/// ```json
/// { "id": 1, "name": "Ana", "email": "ana@x.com" }
/// ```
pub async fn create_user(
    State(state): State<UserState>,
    request: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<User>, AppError> {
    // Malformed body -> 422
    let Json(request) = request?;

    // Assign next id, append and rewrite the users file
    let user = user_service::create_user(state.users.as_ref(), request).await?;
    Ok(Json(user))
}
