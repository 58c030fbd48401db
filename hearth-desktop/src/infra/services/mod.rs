//! Service traits consumed by the domains.

pub mod auth;

pub use auth::AuthApi;
