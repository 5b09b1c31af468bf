/**
 * Application State Management
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum state extraction.
 *
 * # Architecture
 *
 * The service is request-per-call and stateless apart from the identity
 * resolved by the auth middleware, so the only shared state is the
 * database pool. The pool is internally reference-counted and safe to
 * clone per request.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: SqlitePool,
}

/// Implement FromRef for SqlitePool
///
/// This allows handlers that only touch the database to extract
/// `State<SqlitePool>` directly instead of the whole `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}
