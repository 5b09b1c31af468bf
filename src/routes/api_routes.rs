/**
 * API Route Handlers
 *
 * This module wires handlers to paths, split into an explicit allow/deny
 * list: routes on the public router never touch the auth middleware,
 * routes on the protected router always pass through it.
 *
 * # Routes
 *
 * ## Public
 * - `POST /sessions` - login
 * - `POST /users` - user registration
 * - `GET /topics` - list all topics
 * - `GET /topics/{id}` - show one topic
 *
 * ## Protected (Authorization: Token <session-id>)
 * - `GET /sessions` - list the current user's sessions
 * - `PATCH /sessions/{id}` - update a session comment
 * - `DELETE /sessions/{id}` - log out a session
 * - `POST /topics` - create a topic
 * - `PATCH/PUT /topics/{id}` - update a topic
 * - `DELETE /topics/{id}` - delete a topic
 * - `DELETE /users` - delete the current account
 */

use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};

use crate::auth::handlers::{account, login, sessions, signup};
use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::topics::handlers as topics;

/// Configure API routes
///
/// Builds the public and protected route sets and merges them. The auth
/// middleware is layered onto the protected set only, so adding a route
/// here is an explicit decision about which side of the line it lives on.
pub fn configure_api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/sessions", post(login::login))
        .route("/users", post(signup::signup))
        .route("/topics", get(topics::index))
        .route("/topics/{id}", get(topics::show));

    let protected = Router::new()
        .route("/sessions", get(sessions::index))
        .route(
            "/sessions/{id}",
            patch(sessions::update).delete(sessions::destroy),
        )
        .route("/topics", post(topics::create))
        .route(
            "/topics/{id}",
            patch(topics::update)
                .put(topics::update)
                .delete(topics::destroy),
        )
        .route("/users", delete(account::destroy))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    public.merge(protected)
}
