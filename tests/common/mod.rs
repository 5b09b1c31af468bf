//! Shared fixtures for the integration suites
//!
//! Provides an in-memory test database, a test server over the real
//! router, and helpers for seeding users and logging in through the API.

use agora::auth::users::{self, User};
use agora::routes::router::create_router;
use agora::server::state::AppState;
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Create a fresh in-memory database with migrations applied
///
/// The pool is pinned to a single connection: an in-memory SQLite
/// database lives exactly as long as the connection that opened it.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .min_connections(1)
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// Start a test server over the real router
pub async fn test_server(pool: &SqlitePool) -> TestServer {
    let app = create_router(AppState { pool: pool.clone() });
    TestServer::new(app).expect("failed to start test server")
}

/// Insert a user directly into the store
///
/// Uses the minimum bcrypt cost to keep the suites fast; login still
/// verifies against the hash like any other.
pub async fn create_user(pool: &SqlitePool, email: &str, password: &str) -> User {
    let password_hash = bcrypt::hash(password, 4).expect("failed to hash password");
    users::create_user(pool, email, &password_hash)
        .await
        .expect("failed to create user")
}

/// Log in through the API and return the bearer token
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/sessions")
        .json(&serde_json::json!({"email": email, "password": password}))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    body["token"]
        .as_str()
        .expect("login response carries no token")
        .to_string()
}

/// Format a token into the Authorization header value
pub fn token_header(token: &str) -> String {
    format!("Token {}", token)
}
