//! Database operations for topics
//!
//! This module contains the topic model and its CRUD queries. Ownership
//! checks live in the handlers; everything here is keyed by plain ids.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// A user-owned topic
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Topic {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new topic owned by a user.
pub async fn create_topic(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    body: Option<&str>,
) -> Result<Topic, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        INSERT INTO topics (user_id, title, body, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(title)
    .bind(body)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Topic {
        id: result.last_insert_rowid(),
        user_id,
        title: title.to_string(),
        body: body.map(|s| s.to_string()),
        created_at: now,
        updated_at: now,
    })
}

/// Get a topic by id, or None if not found.
pub async fn find_topic(pool: &SqlitePool, id: i64) -> Result<Option<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, user_id, title, body, created_at, updated_at
        FROM topics
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// List all topics, in insertion order.
pub async fn list_topics(pool: &SqlitePool) -> Result<Vec<Topic>, sqlx::Error> {
    sqlx::query_as::<_, Topic>(
        r#"
        SELECT id, user_id, title, body, created_at, updated_at
        FROM topics
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Update a topic's title and body, returning the updated row.
pub async fn update_topic(
    pool: &SqlitePool,
    id: i64,
    title: &str,
    body: Option<&str>,
) -> Result<Topic, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Topic>(
        r#"
        UPDATE topics
        SET title = ?, body = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, user_id, title, body, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(body)
    .bind(now)
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Delete a topic.
pub async fn delete_topic(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM topics WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
