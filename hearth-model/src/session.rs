//! Session grants issued by the hosted auth service.

use chrono::{DateTime, Duration, Utc};

/// An access grant from the auth service.
///
/// The client treats the grant as opaque: presence means the sign-in
/// succeeded, `access_token` is forwarded verbatim on authenticated
/// requests, and `expires_at` only drives the keep-alive schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub refresh_token: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session from the raw grant fields, resolving the relative
    /// `expires_in` the service reports into an absolute instant.
    pub fn from_grant(
        access_token: String,
        token_type: String,
        refresh_token: Option<String>,
        expires_in: Option<i64>,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expires_at =
            expires_in.map(|secs| issued_at + Duration::seconds(secs));
        Self {
            access_token,
            token_type,
            refresh_token,
            expires_at,
        }
    }

    /// Whether the grant can be refreshed at all.
    pub fn is_refreshable(&self) -> bool {
        self.refresh_token.is_some()
    }

    /// Whether the grant expires within `window` of `now`.
    ///
    /// Grants without an expiry never report as expiring; the service owns
    /// their lifecycle.
    pub fn expires_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.expires_at
            .is_some_and(|expires_at| expires_at - now <= window)
    }
}
