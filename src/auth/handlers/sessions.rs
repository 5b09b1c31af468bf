/**
 * Session Management Handlers
 *
 * This module implements the handlers for listing, updating, and
 * destroying sessions.
 *
 * # Endpoints
 *
 * - `GET /sessions` - list the current user's sessions
 * - `PATCH /sessions/{id}` - update a session's comment (owner only)
 * - `DELETE /sessions/{id}` - log out a session (owner only)
 *
 * # Ownership
 *
 * The listing is always scoped to the current user and can never leak
 * another user's sessions. Updating or destroying a session that exists
 * but belongs to someone else returns 401; a session id that does not
 * exist at all returns 404.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{SessionListResponse, SessionResponse, UpdateSessionRequest};
use crate::auth::sessions;
use crate::error::ApiError;
use crate::middleware::auth::CurrentSession;

/// List the current user's sessions
///
/// # Example Response
///
/// ```json
/// {
///   "sessions": [
///     {"id": 3, "comment": "my Mac"},
///     {"id": 5, "comment": "my iPhone"}
///   ]
/// }
/// ```
pub async fn index(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = sessions::sessions_for_user(&pool, current.user.id).await?;
    Ok(Json(SessionListResponse {
        sessions: sessions.into_iter().map(SessionResponse::from).collect(),
    }))
}

/// Update a session's comment
///
/// Only the owning user may modify a session. A request body without a
/// comment leaves the stored comment unchanged.
///
/// # Errors
///
/// * `401 Unauthorized` - the session belongs to another user
/// * `404 Not Found` - no session with this id
///
/// # Example Request
///
/// ```http
/// PATCH /sessions/5 HTTP/1.1
/// Authorization: Token 3
/// Content-Type: application/json
///
/// {"comment": "my iMac"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 5, "comment": "my iMac"}
/// ```
pub async fn update(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
    Path(id): Path<i64>,
    Json(request): Json<UpdateSessionRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = sessions::find_session(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    if session.user_id != current.user.id {
        tracing::warn!(
            "User {} tried to update session {} owned by user {}",
            current.user.id,
            session.id,
            session.user_id
        );
        return Err(ApiError::Unauthorized);
    }

    let session = match request.comment {
        Some(comment) => sessions::update_session_comment(&pool, id, &comment).await?,
        None => session,
    };

    Ok(Json(SessionResponse::from(session)))
}

/// Log out a session
///
/// Only the owning user may destroy a session. After deletion the token is
/// permanently invalid; session ids are never reassigned.
///
/// # Errors
///
/// * `401 Unauthorized` - the session belongs to another user
/// * `404 Not Found` - no session with this id
pub async fn destroy(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let session = sessions::find_session(&pool, id)
        .await?
        .ok_or(ApiError::NotFound)?;
    if session.user_id != current.user.id {
        tracing::warn!(
            "User {} tried to destroy session {} owned by user {}",
            current.user.id,
            session.id,
            session.user_id
        );
        return Err(ApiError::Unauthorized);
    }

    sessions::delete_session(&pool, id).await?;
    tracing::info!("User {} logged out session {}", current.user.id, id);

    Ok(StatusCode::NO_CONTENT)
}
