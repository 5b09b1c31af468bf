/**
 * Account Deletion Handler
 *
 * This module implements DELETE /users, which removes the current user's
 * account. The repository deletes the user's sessions and topics in the
 * same transaction, so every token the user held stops working at once.
 */

use axum::{extract::State, http::StatusCode};
use sqlx::SqlitePool;

use crate::auth::users;
use crate::error::ApiError;
use crate::middleware::auth::CurrentSession;

/// Delete the current user's account
///
/// Requires authentication; the acting user is the one deleted. Returns
/// 204 on success.
pub async fn destroy(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
) -> Result<StatusCode, ApiError> {
    tracing::info!(
        "Deleting account {} ({})",
        current.user.id,
        current.user.email
    );

    users::delete_user(&pool, current.user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
