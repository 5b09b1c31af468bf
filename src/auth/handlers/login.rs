/**
 * Login Handler
 *
 * This module implements the login handler for POST /sessions.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact email match
 * 2. Verify the password using bcrypt
 * 3. Create a session row, optionally tagged with a comment
 * 4. Return the session id as the bearer token
 *
 * The two failure modes are deliberately distinguished: an unknown email
 * is a 404 echoing the submitted address, a wrong password is a 422 with
 * a password-scoped message.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::{sessions, users};
use crate::error::ApiError;

/// Login handler
///
/// Verifies the submitted credentials and opens a new session. The
/// returned token is valid until the session is destroyed.
///
/// # Errors
///
/// * `404 Not Found` - no user registered under the submitted email
/// * `422 Unprocessable Entity` - password does not match
///
/// # Example Request
///
/// ```http
/// POST /sessions HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "p1aint3xt-pa55w0rd", "comment": "my Mac"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"token": "5"}
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = users::find_user_by_email(&pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::UserNotFound {
                email: request.email.clone(),
            }
        })?;

    let valid = bcrypt::verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Wrong password for: {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let session = sessions::create_session(&pool, user.id, request.comment.as_deref()).await?;
    tracing::info!("User {} logged in, session {}", user.email, session.id);

    Ok(Json(TokenResponse {
        token: session.id.to_string(),
    }))
}
