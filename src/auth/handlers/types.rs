/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the session
 * and user handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::sessions::Session;

/// Login request
///
/// The password and comment default to empty when omitted, so a request
/// missing them still reaches the email lookup and gets the field-scoped
/// error instead of a deserialization failure.
#[derive(Deserialize, Debug)]
pub struct LoginRequest {
    /// Email of the registered user
    #[serde(default)]
    pub email: String,
    /// Plaintext password, verified against the stored hash
    #[serde(default)]
    pub password: String,
    /// Optional comment identifying the session ("my Mac")
    #[serde(default)]
    pub comment: Option<String>,
}

/// Login response carrying the bearer token
#[derive(Serialize, Debug)]
pub struct TokenResponse {
    /// Opaque token, presented back as `Authorization: Token <token>`
    pub token: String,
}

/// Session response body
#[derive(Serialize, Debug)]
pub struct SessionResponse {
    pub id: i64,
    pub comment: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            comment: session.comment,
        }
    }
}

/// Session list response
#[derive(Serialize, Debug)]
pub struct SessionListResponse {
    pub sessions: Vec<SessionResponse>,
}

/// Session update request
#[derive(Deserialize, Debug)]
pub struct UpdateSessionRequest {
    /// New comment; a missing field leaves the stored comment unchanged
    #[serde(default)]
    pub comment: Option<String>,
}

/// Signup request
#[derive(Deserialize, Debug)]
pub struct SignupRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// User response (never includes the password hash)
#[derive(Serialize, Debug)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
}
