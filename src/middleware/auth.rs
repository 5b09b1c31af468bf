/**
 * Authentication Middleware
 *
 * This module provides the middleware protecting routes that require a
 * logged-in user. It reads the bearer token from the Authorization header,
 * resolves the matching session row, and attaches the acting identity to
 * the request for handlers to extract.
 *
 * # Token Format
 *
 * Clients authenticate with `Authorization: Token <session-id>`, where the
 * session id is the opaque value returned by login. There is no expiry
 * check; a token is valid until its session row is deleted.
 *
 * # Route Composition
 *
 * The middleware is not applied globally. The router composes it onto an
 * explicit protected route set; login, signup, and public topic reads stay
 * on the unprotected router.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use sqlx::SqlitePool;

use crate::auth::sessions::{self, Session};
use crate::auth::users::{self, User};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Acting identity resolved from the bearer token
///
/// Inserted into request extensions by [`require_auth`] and extracted by
/// handlers as a parameter. The session is the row the token named; the
/// user is its owner.
#[derive(Clone, Debug)]
pub struct CurrentSession {
    pub session: Session,
    pub user: User,
}

/// Parse a session id out of an `Authorization: Token <id>` header value.
fn parse_token(header: &str) -> Option<i64> {
    header.strip_prefix("Token ")?.trim().parse().ok()
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Parses it as a session id and looks up the session row
/// 3. Resolves the owning user
/// 4. Attaches a [`CurrentSession`] to request extensions
///
/// Returns 401 Unauthorized if the header is missing, malformed, or names
/// no existing session.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthenticated
        })?;

    let session_id = parse_token(header).ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        ApiError::Unauthenticated
    })?;

    let current = resolve_session(&state.pool, session_id).await?;
    request.extensions_mut().insert(current);

    Ok(next.run(request).await)
}

/// Resolve a session id to the acting identity.
async fn resolve_session(pool: &SqlitePool, session_id: i64) -> Result<CurrentSession, ApiError> {
    let session = sessions::find_session(pool, session_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token names no session: {}", session_id);
            ApiError::Unauthenticated
        })?;

    let user = users::find_user_by_id(pool, session.user_id)
        .await?
        .ok_or(ApiError::Unauthenticated)?;

    Ok(CurrentSession { session, user })
}

/// Axum extractor for the acting identity
///
/// Handlers behind [`require_auth`] take `CurrentSession` as a parameter
/// to read the identity the middleware resolved.
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<CurrentSession>().cloned().ok_or_else(|| {
            tracing::warn!("CurrentSession not found in request extensions");
            ApiError::Unauthenticated
        })
    }
}
