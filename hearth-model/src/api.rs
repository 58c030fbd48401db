//! Wire DTOs for the hosted auth service endpoints.
//!
//! Request bodies borrow from the caller so credentials are never copied
//! into an owned intermediate just to be serialized. Response payloads
//! tolerate unknown fields; the service adds to them freely.

use crate::{account::Account, session::Session};

/// Body for `POST /auth/v1/token?grant_type=password`.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PasswordGrantRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for `POST /auth/v1/signup`.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SignUpRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for `POST /auth/v1/token?grant_type=refresh_token`.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Successful token-endpoint payload.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct GrantPayload {
    pub access_token: String,
    pub token_type: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub expires_in: Option<i64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub refresh_token: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub user: Option<Account>,
}

/// Sign-up payload. The service answers with a full grant when the account
/// is usable immediately, or with the bare account when email confirmation
/// is still pending.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SignUpPayload {
    Granted(GrantPayload),
    Pending(Account),
}

/// Error body shapes the service emits. Field names vary by endpoint
/// generation, so every known spelling is optional.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct ServiceErrorBody {
    #[cfg_attr(feature = "serde", serde(default))]
    pub error: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub error_description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub msg: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub message: Option<String>,
}

impl ServiceErrorBody {
    /// The most descriptive message the body carries, if any.
    pub fn detail(&self) -> Option<&str> {
        self.error_description
            .as_deref()
            .or(self.msg.as_deref())
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }
}

/// Outcome of a credential submission as seen by the client domain.
///
/// `session` is `None` when the service completed without granting access
/// (e.g. sign-up awaiting email confirmation).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthResponse {
    pub account: Option<Account>,
    pub session: Option<Session>,
}

#[cfg(test)]
#[cfg(feature = "serde")]
mod tests {
    use super::*;

    #[test]
    fn grant_payload_tolerates_unknown_fields() {
        let payload: GrantPayload = serde_json::from_str(
            r#"{
                "access_token": "at",
                "token_type": "bearer",
                "expires_in": 3600,
                "refresh_token": "rt",
                "provider_token": null,
                "user": {
                    "id": "8e435d47-1a3e-4f8f-8fd4-4a4d0e1f3c60",
                    "email": "pat@example.com",
                    "created_at": "2026-01-04T10:00:00Z",
                    "role": "authenticated"
                }
            }"#,
        )
        .expect("grant payload should deserialize");

        assert_eq!(payload.access_token, "at");
        assert_eq!(payload.expires_in, Some(3600));
        let user = payload.user.expect("user present");
        assert_eq!(user.email.as_deref(), Some("pat@example.com"));
    }

    #[test]
    fn sign_up_payload_distinguishes_pending_confirmation() {
        let pending: SignUpPayload = serde_json::from_str(
            r#"{
                "id": "8e435d47-1a3e-4f8f-8fd4-4a4d0e1f3c60",
                "email": "new@example.com",
                "created_at": "2026-01-04T10:00:00Z"
            }"#,
        )
        .expect("pending payload should deserialize");
        assert!(matches!(pending, SignUpPayload::Pending(_)));

        let granted: SignUpPayload = serde_json::from_str(
            r#"{
                "access_token": "at",
                "token_type": "bearer",
                "user": {"id": "8e435d47-1a3e-4f8f-8fd4-4a4d0e1f3c60"}
            }"#,
        )
        .expect("granted payload should deserialize");
        assert!(matches!(granted, SignUpPayload::Granted(_)));
    }

    #[test]
    fn service_error_body_prefers_description() {
        let body: ServiceErrorBody = serde_json::from_str(
            r#"{"error": "invalid_grant", "error_description": "Invalid login credentials"}"#,
        )
        .expect("error body should deserialize");
        assert_eq!(body.detail(), Some("Invalid login credentials"));
    }
}
