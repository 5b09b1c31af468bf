//! API Error Module
//!
//! This module defines the error taxonomy for the HTTP API.
//! Every fallible handler returns these errors and lets Axum render them.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions and status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # HTTP Response Conversion
//!
//! All API errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers with `?`. Errors that carry a field-scoped
//! message render as `{"error": {"<field>": "<message>"}}`; plain not-found
//! errors render as a bare status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
