/**
 * Topic Handlers
 *
 * This module implements the HTTP handlers for the topic resource.
 *
 * # Endpoints
 *
 * - `GET /topics` - list all topics (public)
 * - `GET /topics/{id}` - show one topic (public)
 * - `POST /topics` - create a topic (requires authentication)
 * - `PATCH/PUT /topics/{id}` - update a topic (owner only)
 * - `DELETE /topics/{id}` - delete a topic (owner only)
 *
 * # Ownership
 *
 * Mutations are restricted to the topic's owner. A non-owner with a valid
 * token receives 401, distinguished from the 404 returned when no topic
 * with the requested id exists.
 */

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::middleware::auth::CurrentSession;
use crate::topics::db;
use crate::topics::db::Topic;

/// Topic create/update parameters
///
/// Both fields are optional so PATCH requests can send only what changes;
/// `create` rejects a missing title during validation.
#[derive(Deserialize, Debug)]
pub struct TopicParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Topic response body
#[derive(Serialize, Debug)]
pub struct TopicResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Topic> for TopicResponse {
    fn from(topic: Topic) -> Self {
        Self {
            id: topic.id,
            user_id: topic.user_id,
            title: topic.title,
            body: topic.body,
            created_at: topic.created_at,
            updated_at: topic.updated_at,
        }
    }
}

/// Reject blank titles the way the model constraint describes them.
fn validate_title(title: &str) -> Result<(), ApiError> {
    if title.trim().is_empty() {
        return Err(ApiError::validation("title", "can't be blank"));
    }
    Ok(())
}

/// List all topics
///
/// Public endpoint, no authentication required. Returns every topic in
/// insertion order.
pub async fn index(State(pool): State<SqlitePool>) -> Result<Json<Vec<TopicResponse>>, ApiError> {
    let topics = db::list_topics(&pool).await?;
    Ok(Json(topics.into_iter().map(TopicResponse::from).collect()))
}

/// Show one topic
///
/// Public endpoint. Returns 404 when no topic with the id exists.
pub async fn show(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<Json<TopicResponse>, ApiError> {
    let topic = db::find_topic(&pool, id).await?.ok_or(ApiError::NotFound)?;
    Ok(Json(topic.into()))
}

/// Create a topic owned by the current user
///
/// # Errors
///
/// * `401 Unauthorized` - no valid token
/// * `422 Unprocessable Entity` - blank or missing title
///
/// # Example Request
///
/// ```http
/// POST /topics HTTP/1.1
/// Authorization: Token 5
/// Content-Type: application/json
///
/// {"title": "First topic", "body": "Hello"}
/// ```
pub async fn create(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
    Json(params): Json<TopicParams>,
) -> Result<(StatusCode, Json<TopicResponse>), ApiError> {
    let title = params.title.as_deref().unwrap_or("");
    validate_title(title)?;

    let topic = db::create_topic(&pool, current.user.id, title, params.body.as_deref()).await?;
    tracing::info!("User {} created topic {}", current.user.id, topic.id);

    Ok((StatusCode::CREATED, Json(topic.into())))
}

/// Update a topic
///
/// Only the owner may update. Fields missing from the request body keep
/// their stored values.
///
/// # Errors
///
/// * `401 Unauthorized` - no valid token, or the topic belongs to another user
/// * `404 Not Found` - no topic with this id
/// * `422 Unprocessable Entity` - title updated to blank
pub async fn update(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
    Path(id): Path<i64>,
    Json(params): Json<TopicParams>,
) -> Result<Json<TopicResponse>, ApiError> {
    let topic = db::find_topic(&pool, id).await?.ok_or(ApiError::NotFound)?;
    if topic.user_id != current.user.id {
        tracing::warn!(
            "User {} tried to update topic {} owned by user {}",
            current.user.id,
            topic.id,
            topic.user_id
        );
        return Err(ApiError::Unauthorized);
    }

    let title = params.title.unwrap_or(topic.title);
    validate_title(&title)?;
    let body = params.body.or(topic.body);

    let updated = db::update_topic(&pool, id, &title, body.as_deref()).await?;
    Ok(Json(updated.into()))
}

/// Delete a topic
///
/// Only the owner may delete.
///
/// # Errors
///
/// * `401 Unauthorized` - no valid token, or the topic belongs to another user
/// * `404 Not Found` - no topic with this id
pub async fn destroy(
    State(pool): State<SqlitePool>,
    current: CurrentSession,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let topic = db::find_topic(&pool, id).await?.ok_or(ApiError::NotFound)?;
    if topic.user_id != current.user.id {
        tracing::warn!(
            "User {} tried to delete topic {} owned by user {}",
            current.user.id,
            topic.id,
            topic.user_id
        );
        return Err(ApiError::Unauthorized);
    }

    db::delete_topic(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
