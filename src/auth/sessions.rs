/**
 * Session Store
 *
 * This module handles the persisted sessions that back token authentication.
 * A session row pairs an opaque token with its owning user and a free-text
 * comment. The token IS the row id: the store assigns ids monotonically and
 * never reuses one, so a destroyed session stays invalid forever.
 *
 * Sessions carry no expiry. A token is valid until its row is deleted,
 * either explicitly by the owner or when the owning user is removed.
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// A persisted session
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Session {
    /// Store-assigned id, presented by clients as the bearer token
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    /// Free-text comment identifying the session ("my Mac", "my iPhone")
    pub comment: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Create a new session for a user, with an optional comment.
pub async fn create_session(
    pool: &SqlitePool,
    user_id: i64,
    comment: Option<&str>,
) -> Result<Session, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO sessions (user_id, comment, created_at, updated_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(comment)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Session {
        id: result.last_insert_rowid(),
        user_id,
        comment: comment.map(|s| s.to_string()),
        created_at: now,
        updated_at: now,
    })
}

/// Get a session by id, or None if not found.
pub async fn find_session(pool: &SqlitePool, id: i64) -> Result<Option<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, comment, created_at, updated_at
        FROM sessions
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all sessions owned by a user, in insertion order.
pub async fn sessions_for_user(
    pool: &SqlitePool,
    user_id: i64,
) -> Result<Vec<Session>, sqlx::Error> {
    sqlx::query_as::<_, Session>(
        r#"
        SELECT id, user_id, comment, created_at, updated_at
        FROM sessions
        WHERE user_id = ?
        ORDER BY id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Update a session's comment and return the updated row.
pub async fn update_session_comment(
    pool: &SqlitePool,
    id: i64,
    comment: &str,
) -> Result<Session, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Session>(
        r#"
        UPDATE sessions
        SET comment = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, user_id, comment, created_at, updated_at
        "#,
    )
    .bind(comment)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a session. The id is never reassigned afterwards.
pub async fn delete_session(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
