//! Topics Module
//!
//! This module implements the topic resource: user-owned records with a
//! title and a body. Reads are public; mutations require authentication
//! and ownership.
//!
//! # Module Structure
//!
//! ```text
//! topics/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - Topic model and database operations
//! └── handlers.rs - HTTP handlers for topic endpoints
//! ```

/// Topic model and database operations
pub mod db;

/// HTTP handlers for topic endpoints
pub mod handlers;

// Re-export commonly used types
pub use db::Topic;
