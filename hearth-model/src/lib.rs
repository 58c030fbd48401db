//! Core data model definitions shared across Hearth crates.
#![allow(missing_docs)]

pub mod account;
pub mod api;
pub mod session;

// Intentionally curated re-exports for downstream consumers.
pub use account::Account;
pub use api::{
    AuthResponse, GrantPayload, PasswordGrantRequest, RefreshRequest,
    ServiceErrorBody, SignUpPayload, SignUpRequest,
};
pub use session::Session;
