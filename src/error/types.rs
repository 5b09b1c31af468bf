/**
 * API Error Types
 *
 * This module defines the error taxonomy surfaced by the HTTP API.
 *
 * # Error Categories
 *
 * - `UserNotFound` - login attempted with an email that has no account
 * - `InvalidCredentials` - login attempted with a wrong password
 * - `Unauthenticated` - missing or invalid bearer token
 * - `Unauthorized` - valid token, but the record belongs to another user
 * - `NotFound` - resource id does not exist
 * - `Validation` - a field failed a model constraint
 * - `Database` / `Hash` - infrastructure failures, rendered as 500
 *
 * None of these are retried and none are swallowed; each maps to exactly
 * one HTTP status.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors surfaced by the HTTP API
///
/// Each variant knows its HTTP status code and, where applicable, the
/// field-scoped message rendered into the JSON error body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login attempted with an email no user is registered under.
    /// The submitted email is echoed back in the error message.
    #[error("no user with email: {email}")]
    UserNotFound { email: String },

    /// Login attempted with a password that does not match the stored hash.
    #[error("password not match")]
    InvalidCredentials,

    /// The request carried no token, a malformed token, or a token that
    /// resolves to no session.
    #[error("missing or invalid token")]
    Unauthenticated,

    /// The token is valid but the target record belongs to another user.
    #[error("not owned by current user")]
    Unauthorized,

    /// No record with the requested id. Rendered as a bare 404.
    #[error("record not found")]
    NotFound,

    /// A field failed a model constraint.
    #[error("{field} {message}")]
    Validation {
        /// The offending field
        field: &'static str,
        /// Human-readable message, keyed under the field in the response
        message: String,
    },

    /// Database error
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Password hashing or verification failure
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ApiError {
    /// Create a validation error for a single field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `UserNotFound`, `NotFound` - 404 Not Found
    /// - `InvalidCredentials`, `Validation` - 422 Unprocessable Entity
    /// - `Unauthenticated`, `Unauthorized` - 401 Unauthorized
    /// - `Database`, `Hash` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::UserNotFound { .. } | Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthenticated | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Hash(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the field and message rendered into the JSON error body
    ///
    /// Returns `None` for `NotFound`, which renders as a bare status with no
    /// body. Infrastructure errors render a generic message so internals
    /// never leak to clients.
    pub fn field_error(&self) -> Option<(&'static str, String)> {
        match self {
            Self::UserNotFound { .. } => Some(("email", self.to_string())),
            Self::InvalidCredentials => Some(("password", "not match".to_string())),
            Self::Unauthenticated => Some(("token", "missing or invalid token".to_string())),
            Self::Unauthorized => Some(("base", "not owned by current user".to_string())),
            Self::NotFound => None,
            Self::Validation { field, message } => Some((*field, message.clone())),
            Self::Database(_) | Self::Hash(_) => {
                Some(("base", "internal server error".to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_embeds_email() {
        let error = ApiError::UserNotFound {
            email: "ghost@example.com".to_string(),
        };
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        let (field, message) = error.field_error().unwrap();
        assert_eq!(field, "email");
        assert!(message.contains("ghost@example.com"));
    }

    #[test]
    fn test_invalid_credentials_scopes_password_field() {
        let error = ApiError::InvalidCredentials;
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.field_error(),
            Some(("password", "not match".to_string()))
        );
    }

    #[test]
    fn test_auth_errors_share_status_but_not_message() {
        let unauthenticated = ApiError::Unauthenticated;
        let unauthorized = ApiError::Unauthorized;
        assert_eq!(unauthenticated.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_ne!(unauthenticated.field_error(), unauthorized.field_error());
    }

    #[test]
    fn test_not_found_has_no_body() {
        let error = ApiError::NotFound;
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(error.field_error(), None);
    }

    #[test]
    fn test_validation_error() {
        let error = ApiError::validation("title", "can't be blank");
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            error.field_error(),
            Some(("title", "can't be blank".to_string()))
        );
    }

    #[test]
    fn test_database_error_is_generic_500() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let (field, message) = error.field_error().unwrap();
        assert_eq!(field, "base");
        assert_eq!(message, "internal server error");
    }
}
