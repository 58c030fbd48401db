//! Auth service trait and implementations
//!
//! This is the runtime-facing contract the app uses to authenticate
//! against the hosted service. The service is the authority for identity
//! and token issuance; the client only submits credentials and holds the
//! resulting grant. For the recording stub used by tests, see
//! `infra::testing::stubs::StubAuthApi`.

use crate::domains::auth::{errors::ApiResult, types::Credentials};
use hearth_model::{AuthResponse, Session};

use async_trait::async_trait;

/// Capability boundary to the hosted auth service.
///
/// Injected into the app state as an `Arc<dyn AuthApi>` so tests can
/// substitute a controllable stand-in.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange an email/password pair for a session grant.
    async fn sign_in_with_password(
        &self,
        credentials: Credentials,
    ) -> ApiResult<AuthResponse>;

    /// Register a new account. May complete without a session when the
    /// service requires email confirmation first.
    async fn sign_up(&self, credentials: Credentials)
    -> ApiResult<AuthResponse>;

    /// Exchange a refresh token for a fresh session grant.
    async fn refresh_session(&self, refresh_token: String)
    -> ApiResult<Session>;

    /// Invalidate the current grant server-side. Best effort.
    async fn sign_out(&self, access_token: String) -> ApiResult<()>;
}
