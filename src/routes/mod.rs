//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── api_routes.rs - Route definitions and the public/protected split
//! └── router.rs     - Router assembly (tracing, fallback, state)
//! ```

/// Route definitions
pub mod api_routes;

/// Router assembly
pub mod router;

// Re-export commonly used types
pub use router::create_router;
