//! The signed-in identity as reported by the hosted auth service.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A user account on the budgeting service.
///
/// The client never mutates accounts; they arrive fully formed from the
/// service alongside a session grant and are displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Account {
    pub id: Uuid,
    /// The address the account was registered with. Optional because the
    /// service also supports phone-based identities we do not render.
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub created_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Label shown in the UI for this account.
    pub fn display_label(&self) -> &str {
        self.email.as_deref().unwrap_or("account")
    }
}
