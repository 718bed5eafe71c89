//! User service - business logic for the users collection.

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, User},
    store::RecordStore,
};

/// All users in creation order.
pub async fn list_users(store: &dyn RecordStore<User>) -> Vec<User> {
    store.list().await
}

/// Get user by ID.
///
/// # Errors
///
/// - `UserNotFound`: no user has this id
pub async fn get_user(store: &dyn RecordStore<User>, user_id: i64) -> Result<User, AppError> {
    store.get(user_id).await.ok_or(AppError::UserNotFound)
}

/// Create a user with the next free id and persist it.
///
/// The email is stored as given: no format check, duplicates allowed.
pub async fn create_user(
    store: &dyn RecordStore<User>,
    request: CreateUserRequest,
) -> Result<User, AppError> {
    let user = store.insert(request.into()).await?;
    tracing::info!(user_id = user.id, "User created");
    Ok(user)
}
