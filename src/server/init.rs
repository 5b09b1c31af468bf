/**
 * Server Initialization
 *
 * This module assembles the application: database pool, application
 * state, and the configured router.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::load_database;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// Loads the database from the environment, runs migrations, and returns
/// a router ready to serve. Tests build the router directly from a pool
/// via [`create_router`] instead.
pub async fn create_app() -> Result<Router, sqlx::Error> {
    tracing::info!("Initializing agora server");

    let pool = load_database().await?;
    let app = create_router(AppState { pool });

    tracing::info!("Router configured");
    Ok(app)
}
