//! Top-level application state.

use std::sync::Arc;

use crate::domains::auth::types::{Alert, AuthFlow};
use crate::infra::services::AuthApi;

/// Auth domain state: the flow machine, the active alert, and the injected
/// service handle.
pub struct AuthState {
    pub flow: AuthFlow,
    /// At most one alert at a time; each submit activation resolves into
    /// either one alert or one screen transition.
    pub alert: Option<Alert>,
    pub api: Arc<dyn AuthApi>,
}

impl AuthState {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            flow: AuthFlow::default(),
            alert: None,
            api,
        }
    }

    /// Raise an alert, replacing any the user has not yet dismissed.
    pub fn raise_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("flow", &self.flow)
            .field("alert", &self.alert)
            .finish()
    }
}

/// Whole-application state.
#[derive(Debug)]
pub struct State {
    pub auth: AuthState,
}

impl State {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            auth: AuthState::new(api),
        }
    }
}
