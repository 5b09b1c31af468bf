/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /users.
 *
 * # Registration Process
 *
 * 1. Validate email presence and password length
 * 2. Check that no user already holds the email (case-sensitive)
 * 3. Hash the password with bcrypt
 * 4. Create the user row
 *
 * # Validation
 *
 * - Email must be non-empty and unique
 * - Password must be non-empty and at least 8 characters
 *
 * Failures come back as 422 with field-scoped messages; the password hash
 * is never included in any response.
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};
use sqlx::SqlitePool;

use crate::auth::handlers::types::{SignupRequest, UserResponse};
use crate::auth::users;
use crate::error::ApiError;

/// Validate signup input against the model constraints.
fn validate_signup(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("email", "can't be blank"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("password", "can't be blank"));
    }
    if password.chars().count() < 8 {
        return Err(ApiError::validation(
            "password",
            "is too short (minimum is 8 characters)",
        ));
    }
    Ok(())
}

/// Sign up handler
///
/// Registers a new user. The account can log in immediately via
/// POST /sessions; signup itself does not open a session.
///
/// # Errors
///
/// * `422 Unprocessable Entity` - blank email, short password, or an email
///   that has already been taken
///
/// # Example Request
///
/// ```http
/// POST /users HTTP/1.1
/// Content-Type: application/json
///
/// {"email": "user@example.com", "password": "p1aint3xt-pa55w0rd"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"id": 1, "email": "user@example.com"}
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    tracing::info!("Signup request for: {}", request.email);

    validate_signup(&request.email, &request.password)?;

    // Pre-check for the friendly message; the UNIQUE constraint still backs
    // this up against concurrent signups.
    if users::find_user_by_email(&pool, &request.email)
        .await?
        .is_some()
    {
        tracing::warn!("Email already registered: {}", request.email);
        return Err(ApiError::validation("email", "has already been taken"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;
    let user = users::create_user(&pool, &request.email, &password_hash).await?;
    tracing::info!("User created: {} ({})", user.id, user.email);

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user.id,
            email: user.email,
        }),
    ))
}
