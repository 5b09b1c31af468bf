/**
 * Router Configuration
 *
 * This module provides the main router creation function combining the
 * API routes, request tracing, and the fallback handler.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state containing the database pool
///
/// # Returns
///
/// Configured Axum Router ready to serve requests. Unknown paths fall
/// through to a bare 404.
pub fn create_router(state: AppState) -> Router {
    let router = configure_api_routes(state.clone());

    // Request/response tracing for every route
    let router = router.layer(TraceLayer::new_for_http());

    // Fallback handler for unknown paths
    let router = router.fallback(|| async { StatusCode::NOT_FOUND });

    router.with_state(state)
}
