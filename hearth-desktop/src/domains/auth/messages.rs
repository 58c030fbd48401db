//! Auth domain messages.

use hearth_model::{AuthResponse, Session};

/// Messages handled by the auth domain.
#[derive(Clone)]
pub enum Message {
    // Form editing
    EmailChanged(String),
    PasswordChanged(String),
    TogglePasswordVisibility,

    // Submission
    SubmitSignIn,
    SubmitSignUp,
    SignInCompleted(Result<AuthResponse, String>),
    SignUpCompleted(Result<AuthResponse, String>),

    // Alerts
    DismissAlert,

    // Session lifecycle
    KeepAliveTick,
    SessionRefreshed(Result<Session, String>),
    SignOut,
    SignedOut,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmailChanged(email) => write!(f, "EmailChanged({email})"),
            // Hide sensitive data
            Self::PasswordChanged(_) => write!(f, "PasswordChanged(***)"),
            Self::TogglePasswordVisibility => {
                write!(f, "TogglePasswordVisibility")
            }
            Self::SubmitSignIn => write!(f, "SubmitSignIn"),
            Self::SubmitSignUp => write!(f, "SubmitSignUp"),
            Self::SignInCompleted(result) => {
                write!(f, "SignInCompleted({})", summarize(result))
            }
            Self::SignUpCompleted(result) => {
                write!(f, "SignUpCompleted({})", summarize(result))
            }
            Self::DismissAlert => write!(f, "DismissAlert"),
            Self::KeepAliveTick => write!(f, "KeepAliveTick"),
            Self::SessionRefreshed(result) => write!(
                f,
                "SessionRefreshed({})",
                match result {
                    Ok(_) => "Ok(...)".to_string(),
                    Err(e) => format!("Err({e})"),
                }
            ),
            Self::SignOut => write!(f, "SignOut"),
            Self::SignedOut => write!(f, "SignedOut"),
        }
    }
}

fn summarize(result: &Result<AuthResponse, String>) -> String {
    match result {
        Ok(response) => format!(
            "Ok(session: {}, account: {})",
            response.session.is_some(),
            response.account.is_some()
        ),
        Err(error) => format!("Err({error})"),
    }
}
