//! Middleware Module
//!
//! Request-processing middleware. Currently this is the token
//! authentication layer applied to the protected route set.

/// Token authentication middleware
pub mod auth;

// Re-export commonly used types
pub use auth::{require_auth, CurrentSession};
