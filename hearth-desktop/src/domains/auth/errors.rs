//! Authentication error types
//!
//! Every failure of the auth boundary resolves into a user-visible alert;
//! nothing here propagates past the update loop.

use thiserror::Error;

/// Failures of a call to the hosted auth service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered but declined the request (bad credentials,
    /// unconfirmed account, rate limit). Carries the service's message.
    #[error("{message}")]
    Rejected { message: String },

    /// The request itself could not be completed (connectivity, TLS,
    /// timeout).
    #[error("Could not reach the sign-in service. Check your connection and try again.")]
    Unreachable(#[source] reqwest::Error),

    /// The service answered with something we could not interpret.
    #[error("Unexpected response from the sign-in service")]
    InvalidResponse(String),

    /// The service completed without granting a session where one was
    /// required.
    #[error("The sign-in service did not return a session")]
    MissingSession,
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Unreachable(err)
    }
}

/// Result type alias for auth service operations
pub type ApiResult<T> = Result<T, ApiError>;
