//! Agora - Main Library
//!
//! Agora is a small multi-user discussion backend: token-based session
//! authentication plus a topic resource owned by authenticated users.
//!
//! # Overview
//!
//! This library provides:
//! - Login that trades credentials for an opaque bearer token
//! - Session management (list, comment, log out) scoped to the owner
//! - Topic CRUD with public reads and owner-only mutations
//! - User registration and account deletion with explicit cascades
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - Route configuration and the public/protected split
//! - **`auth`** - Users, the session store, and their HTTP handlers
//! - **`topics`** - The topic resource
//! - **`middleware`** - Token authentication middleware
//! - **`error`** - API error taxonomy
//!
//! # Authentication
//!
//! The bearer token is the session row's store-assigned id. Clients send
//! `Authorization: Token <id>`; the middleware resolves the session and
//! its owning user. Tokens never expire; destroying the session row is
//! the only revocation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use agora::server::init::create_app;
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let app = create_app().await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// API error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Topic resource
pub mod topics;

/// Middleware for request processing
pub mod middleware;

// Re-export commonly used types
pub use error::ApiError;
pub use server::create_app;
