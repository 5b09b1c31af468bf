//! Authentication Module
//!
//! This module handles user accounts, persisted sessions, and the HTTP
//! handlers for both.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User model and database operations
//! - **`sessions`** - Session store backing token authentication
//! - **`handlers`** - HTTP handlers for session and user endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session store
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - The bearer token is the session row id, opaque to clients
//! - Tokens carry no expiry; deleting the session row revokes the token
//! - Session ids are monotonic and never reused, so a revoked token can
//!   never become valid again

/// User model and database operations
pub mod users;

/// Session store backing token authentication
pub mod sessions;

/// HTTP handlers for session and user endpoints
pub mod handlers;

// Re-export commonly used types
pub use sessions::Session;
pub use users::User;
