//! Authentication domain types

use crate::domains::auth::security::Passphrase;
use hearth_model::{Account, Session};

/// The email/password pair exactly as currently held in the form.
///
/// Forwarded verbatim to the auth service: no trimming, casing, or other
/// normalization between the form state and the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: Passphrase,
}

/// A modal notification shown for validation and sign-in failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The alert raised when local email validation fails.
    pub fn invalid_email() -> Self {
        Self::new("Invalid Email", "Please enter a valid email address.")
    }
}

/// Authentication flow state
///
/// `SignIn` covers both the idle form and an in-flight submission
/// (`submitting` is the reentrancy guard); `Authenticated` is the
/// post-login screen.
#[derive(Debug, Clone)]
pub enum AuthFlow {
    /// Credential entry form
    SignIn {
        email: String,
        password: Passphrase,
        show_password: bool,
        submitting: bool,
    },

    /// Successfully signed in
    Authenticated { account: Account, session: Session },
}

impl Default for AuthFlow {
    fn default() -> Self {
        AuthFlow::SignIn {
            email: String::new(),
            password: Passphrase::default(),
            show_password: false,
            submitting: false,
        }
    }
}

impl AuthFlow {
    /// Whether a credential submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(
            self,
            AuthFlow::SignIn {
                submitting: true,
                ..
            }
        )
    }
}
