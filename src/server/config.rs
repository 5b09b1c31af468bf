/**
 * Server Configuration
 *
 * This module handles loading the database connection from the
 * environment and preparing the schema.
 *
 * # Configuration Sources
 *
 * Configuration comes from environment variables, with a local SQLite
 * file as the development default:
 *
 * - `DATABASE_URL` - database location (default `sqlite:agora.db?mode=rwc`)
 * - `SERVER_PORT` - listen port, read in `main` (default 3000)
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Load the database pool and run migrations
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a SQLite connection pool
/// 3. Runs the embedded migrations
///
/// # Errors
///
/// Returns the connection or migration error. Unlike services that can
/// limp along without optional features, this one is a CRUD layer over
/// the store; without a database there is nothing to serve.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite:agora.db?mode=rwc".to_string());

    tracing::info!("Connecting to database at {}", database_url);
    let pool = SqlitePoolOptions::new().connect(&database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}
