//! Test stand-ins for infrastructure services.

pub mod auth;

pub use auth::{ScriptedOutcome, StubAuthApi, sample_account, sample_session};
