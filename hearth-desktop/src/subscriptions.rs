//! Root-level subscription composition

use crate::common::messages::DomainMessage;
use crate::domains::auth::{messages as auth, types::AuthFlow};
use crate::state::State;
use iced::Subscription;

/// Composes all domain subscriptions into a single batch
pub fn subscription(state: &State) -> Subscription<DomainMessage> {
    Subscription::batch(vec![session_keep_alive(state)])
}

/// Tick the auth domain while a refreshable session is held so the grant
/// can be renewed before it lapses. Keyed on the flow state: signing out
/// drops the subscription.
fn session_keep_alive(state: &State) -> Subscription<DomainMessage> {
    match &state.auth.flow {
        AuthFlow::Authenticated { session, .. } if session.is_refreshable() => {
            iced::time::every(std::time::Duration::from_secs(30))
                .map(|_| DomainMessage::Auth(auth::Message::KeepAliveTick))
        }
        _ => Subscription::none(),
    }
}
