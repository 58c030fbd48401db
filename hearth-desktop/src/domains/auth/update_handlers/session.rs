//! Session lifecycle handlers: keep-alive refresh and sign-out.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use iced::Task;
use log::{debug, info, warn};

use crate::domains::auth::{messages as auth, types::AuthFlow};
use crate::state::State;
use hearth_model::Session;

/// How close to expiry a grant may get before a refresh is dispatched.
pub(crate) fn refresh_window() -> Duration {
    Duration::seconds(60)
}

/// Whether the keep-alive tick should exchange the refresh token now.
pub(crate) fn should_refresh(session: &Session, now: DateTime<Utc>) -> bool {
    session.is_refreshable() && session.expires_within(now, refresh_window())
}

/// Periodic tick while authenticated; refreshes the grant when it is about
/// to lapse. A tick outside the refresh window does nothing.
pub fn handle_keep_alive_tick(state: &mut State) -> Task<auth::Message> {
    let AuthFlow::Authenticated { session, .. } = &state.auth.flow else {
        return Task::none();
    };
    if !should_refresh(session, Utc::now()) {
        return Task::none();
    }
    let Some(refresh_token) = session.refresh_token.clone() else {
        return Task::none();
    };

    info!("[Auth] Session close to expiry, refreshing");
    let api = Arc::clone(&state.auth.api);
    Task::perform(
        async move {
            api.refresh_session(refresh_token)
                .await
                .map_err(|e| e.to_string())
        },
        auth::Message::SessionRefreshed,
    )
}

/// Apply a settled refresh. Failures keep the current grant; the next tick
/// retries. A refresh landing after sign-out is dropped.
pub fn handle_session_refreshed(
    state: &mut State,
    result: Result<Session, String>,
) -> Task<auth::Message> {
    let AuthFlow::Authenticated { session, .. } = &mut state.auth.flow else {
        debug!("[Auth] Dropping session refresh: no longer signed in");
        return Task::none();
    };

    match result {
        Ok(fresh) => {
            info!("[Auth] Session refreshed");
            *session = fresh;
        }
        Err(error) => {
            warn!("[Auth] Session refresh failed, will retry: {error}");
        }
    }
    Task::none()
}

/// Invalidate the grant server-side (best effort) and clear local state.
pub fn handle_sign_out(state: &mut State) -> Task<auth::Message> {
    let AuthFlow::Authenticated { session, .. } = &state.auth.flow else {
        return Task::none();
    };

    info!("[Auth] Signing out");
    let access_token = session.access_token.clone();
    let api = Arc::clone(&state.auth.api);
    Task::perform(
        async move {
            if let Err(error) = api.sign_out(access_token).await {
                warn!("[Auth] Server-side sign-out failed: {error}");
            }
        },
        |_| auth::Message::SignedOut,
    )
}

pub fn handle_signed_out(state: &mut State) -> Task<auth::Message> {
    state.auth.flow = AuthFlow::default();
    state.auth.alert = None;
    Task::none()
}
