//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the session and user
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── login.rs    - Login handler (POST /sessions)
//! ├── sessions.rs - Session list/update/destroy handlers
//! ├── signup.rs   - User registration handler (POST /users)
//! └── account.rs  - Account deletion handler (DELETE /users)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: User provides email and password, account is created
//! 2. **Login**: Credentials verified, a session row is created, its id
//!    is returned as the bearer token
//! 3. **Authenticated requests**: `Authorization: Token <id>` resolves the
//!    session and its owning user
//! 4. **Logout**: The owner destroys the session; the token is dead for good

/// Request and response types
pub mod types;

/// Login handler
pub mod login;

/// Session list/update/destroy handlers
pub mod sessions;

/// Signup handler
pub mod signup;

/// Account deletion handler
pub mod account;

// Re-export commonly used types
pub use types::{
    LoginRequest, SessionListResponse, SessionResponse, SignupRequest, TokenResponse,
    UpdateSessionRequest, UserResponse,
};
