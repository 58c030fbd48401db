//! Application configuration and boot state.

use std::sync::Arc;

use crate::infra::AuthGateway;
use crate::state::State;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_url: Arc<str>,
    pub publishable_key: Arc<str>,
}

impl AppConfig {
    pub fn new(
        service_url: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> Self {
        Self {
            service_url: Arc::from(service_url.into()),
            publishable_key: Arc::from(publishable_key.into()),
        }
    }

    pub fn from_environment() -> Self {
        let service_url = std::env::var("HEARTH_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:54321".to_string());
        let publishable_key =
            std::env::var("HEARTH_ANON_KEY").unwrap_or_default();

        if let Err(error) = url::Url::parse(&service_url) {
            log::warn!(
                "HEARTH_SERVICE_URL {service_url:?} is not a valid URL \
                 ({error}); requests will fail"
            );
        }
        if publishable_key.is_empty() {
            log::warn!(
                "HEARTH_ANON_KEY is not set; the auth service will reject \
                 requests"
            );
        }

        Self {
            service_url: Arc::from(service_url),
            publishable_key: Arc::from(publishable_key),
        }
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    pub fn publishable_key(&self) -> &str {
        &self.publishable_key
    }
}

/// Boot logic used by the runtime application.
pub fn base_state(config: &AppConfig) -> State {
    let gateway =
        AuthGateway::new(config.service_url(), config.publishable_key());
    State::new(Arc::new(gateway))
}
