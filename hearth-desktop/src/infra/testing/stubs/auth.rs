//! Controllable stand-in for the hosted auth service.
//!
//! Records every call with the credentials it received so tests can assert
//! on exactly what was dispatched, and replays scripted outcomes.

use crate::{
    domains::auth::{
        errors::{ApiError, ApiResult},
        types::Credentials,
    },
    infra::services::AuthApi,
};

use async_trait::async_trait;
use chrono::Utc;
use hearth_model::{Account, AuthResponse, Session};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Outcome a stubbed endpoint should replay.
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// Full grant: account plus session.
    Granted,
    /// Completed without a session (e.g. confirmation pending).
    Pending,
    /// Service declined with the given message.
    Rejected(String),
    /// The call itself failed.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct StubAuthApi {
    inner: Arc<RwLock<InnerAuthState>>,
}

#[derive(Debug, Clone)]
struct InnerAuthState {
    sign_in_outcome: ScriptedOutcome,
    sign_up_outcome: ScriptedOutcome,
    refresh_outcome: ScriptedOutcome,
    sign_in_calls: Vec<(String, String)>,
    sign_up_calls: Vec<(String, String)>,
    refresh_calls: Vec<String>,
    sign_out_calls: Vec<String>,
}

impl Default for StubAuthApi {
    fn default() -> Self {
        Self::new()
    }
}

impl StubAuthApi {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerAuthState {
                sign_in_outcome: ScriptedOutcome::Granted,
                sign_up_outcome: ScriptedOutcome::Granted,
                refresh_outcome: ScriptedOutcome::Granted,
                sign_in_calls: Vec::new(),
                sign_up_calls: Vec::new(),
                refresh_calls: Vec::new(),
                sign_out_calls: Vec::new(),
            })),
        }
    }

    pub fn with_sign_in_outcome(self, outcome: ScriptedOutcome) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.sign_in_outcome = outcome;
        }
        self
    }

    pub fn with_sign_up_outcome(self, outcome: ScriptedOutcome) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.sign_up_outcome = outcome;
        }
        self
    }

    pub fn with_refresh_outcome(self, outcome: ScriptedOutcome) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.refresh_outcome = outcome;
        }
        self
    }

    /// Every `(email, password)` pair submitted for sign-in, in order.
    pub fn sign_in_calls(&self) -> Vec<(String, String)> {
        self.inner.read().expect("lock poisoned").sign_in_calls.clone()
    }

    pub fn sign_up_calls(&self) -> Vec<(String, String)> {
        self.inner.read().expect("lock poisoned").sign_up_calls.clone()
    }

    pub fn refresh_calls(&self) -> Vec<String> {
        self.inner.read().expect("lock poisoned").refresh_calls.clone()
    }

    pub fn sign_out_calls(&self) -> Vec<String> {
        self.inner.read().expect("lock poisoned").sign_out_calls.clone()
    }

    fn replay(&self, outcome: &ScriptedOutcome) -> ApiResult<AuthResponse> {
        match outcome {
            ScriptedOutcome::Granted => Ok(AuthResponse {
                account: Some(sample_account()),
                session: Some(sample_session()),
            }),
            ScriptedOutcome::Pending => Ok(AuthResponse {
                account: Some(sample_account()),
                session: None,
            }),
            ScriptedOutcome::Rejected(message) => Err(ApiError::Rejected {
                message: message.clone(),
            }),
            ScriptedOutcome::Failed(reason) => {
                Err(ApiError::InvalidResponse(reason.clone()))
            }
        }
    }
}

#[async_trait]
impl AuthApi for StubAuthApi {
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> ApiResult<AuthResponse> {
        let outcome = {
            let mut guard = self.inner.write().expect("lock poisoned");
            guard.sign_in_calls.push((
                credentials.email.clone(),
                credentials.password.as_str().to_string(),
            ));
            guard.sign_in_outcome.clone()
        };
        self.replay(&outcome)
    }

    async fn sign_up(
        &self,
        credentials: Credentials,
    ) -> ApiResult<AuthResponse> {
        let outcome = {
            let mut guard = self.inner.write().expect("lock poisoned");
            guard.sign_up_calls.push((
                credentials.email.clone(),
                credentials.password.as_str().to_string(),
            ));
            guard.sign_up_outcome.clone()
        };
        self.replay(&outcome)
    }

    async fn refresh_session(
        &self,
        refresh_token: String,
    ) -> ApiResult<Session> {
        let outcome = {
            let mut guard = self.inner.write().expect("lock poisoned");
            guard.refresh_calls.push(refresh_token);
            guard.refresh_outcome.clone()
        };
        self.replay(&outcome)?
            .session
            .ok_or(ApiError::MissingSession)
    }

    async fn sign_out(&self, access_token: String) -> ApiResult<()> {
        let mut guard = self.inner.write().expect("lock poisoned");
        guard.sign_out_calls.push(access_token);
        Ok(())
    }
}

/// Account used by scripted grants.
pub fn sample_account() -> Account {
    Account {
        id: Uuid::new_v4(),
        email: Some("test@test.com".into()),
        created_at: Some(Utc::now()),
    }
}

/// Session used by scripted grants.
pub fn sample_session() -> Session {
    Session::from_grant(
        "stub-access-token".into(),
        "bearer".into(),
        Some("stub-refresh-token".into()),
        Some(3600),
        Utc::now(),
    )
}
