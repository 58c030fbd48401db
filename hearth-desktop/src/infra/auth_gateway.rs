//! HTTP gateway to the hosted auth service.

use crate::domains::auth::{
    errors::{ApiError, ApiResult},
    types::Credentials,
};
use crate::infra::services::AuthApi;
use async_trait::async_trait;
use chrono::Utc;
use hearth_model::{
    AuthResponse, GrantPayload, PasswordGrantRequest, RefreshRequest,
    ServiceErrorBody, Session, SignUpPayload, SignUpRequest,
};
use log::{info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Auth service client
///
/// Talks to the service's `/auth/v1/*` endpoints. Holds no session state;
/// the domain owns the grant and passes tokens back in per call.
#[derive(Clone)]
pub struct AuthGateway {
    client: Client,
    base_url: String,
    publishable_key: String,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl AuthGateway {
    /// Create a new gateway against `base_url`, authenticating requests
    /// with the service's publishable key.
    pub fn new(
        base_url: impl Into<String>,
        publishable_key: impl Into<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.into();
        info!("[AuthGateway] Creating gateway with base URL: {}", base_url);

        Self {
            client,
            base_url,
            publishable_key: publishable_key.into(),
        }
    }

    /// Build an auth endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/auth/v1/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Execute a request and decode the JSON body, mapping service error
    /// payloads to `ApiError::Rejected`.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request
            .header("apikey", &self.publishable_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string()));
        }

        let message = response
            .json::<ServiceErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail().map(str::to_string))
            .unwrap_or_else(|| default_rejection(status));
        warn!("[AuthGateway] Service rejected request ({status}): {message}");
        Err(ApiError::Rejected { message })
    }
}

fn default_rejection(status: StatusCode) -> String {
    format!("The sign-in service rejected the request ({status})")
}

fn grant_into_response(grant: GrantPayload) -> ApiResult<AuthResponse> {
    let GrantPayload {
        access_token,
        token_type,
        expires_in,
        refresh_token,
        user,
    } = grant;

    let session = Session::from_grant(
        access_token,
        token_type,
        refresh_token,
        expires_in,
        Utc::now(),
    );
    let account = user.ok_or_else(|| {
        ApiError::InvalidResponse("grant carried no account".into())
    })?;

    Ok(AuthResponse {
        account: Some(account),
        session: Some(session),
    })
}

#[async_trait]
impl AuthApi for AuthGateway {
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> ApiResult<AuthResponse> {
        info!("[AuthGateway] Submitting password sign-in");
        let grant: GrantPayload = self
            .execute(
                self.client
                    .post(self.endpoint("token"))
                    .query(&[("grant_type", "password")])
                    .json(&PasswordGrantRequest {
                        email: &credentials.email,
                        password: credentials.password.as_str(),
                    }),
            )
            .await?;

        grant_into_response(grant)
    }

    async fn sign_up(
        &self,
        credentials: Credentials,
    ) -> ApiResult<AuthResponse> {
        info!("[AuthGateway] Submitting sign-up");
        let payload: SignUpPayload = self
            .execute(self.client.post(self.endpoint("signup")).json(
                &SignUpRequest {
                    email: &credentials.email,
                    password: credentials.password.as_str(),
                },
            ))
            .await?;

        match payload {
            SignUpPayload::Granted(grant) => grant_into_response(grant),
            // Email confirmation pending: an account exists but no grant.
            SignUpPayload::Pending(account) => Ok(AuthResponse {
                account: Some(account),
                session: None,
            }),
        }
    }

    async fn refresh_session(
        &self,
        refresh_token: String,
    ) -> ApiResult<Session> {
        let grant: GrantPayload = self
            .execute(
                self.client
                    .post(self.endpoint("token"))
                    .query(&[("grant_type", "refresh_token")])
                    .json(&RefreshRequest {
                        refresh_token: &refresh_token,
                    }),
            )
            .await?;

        let GrantPayload {
            access_token,
            token_type,
            expires_in,
            refresh_token,
            user: _,
        } = grant;
        Ok(Session::from_grant(
            access_token,
            token_type,
            refresh_token,
            expires_in,
            Utc::now(),
        ))
    }

    async fn sign_out(&self, access_token: String) -> ApiResult<()> {
        let response = self
            .client
            .post(self.endpoint("logout"))
            .header("apikey", &self.publishable_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: default_rejection(status),
            })
        }
    }
}
