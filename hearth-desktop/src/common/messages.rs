//! Top-level message type composed from the domain messages.

use crate::domains::auth::messages as auth;

/// Messages routed by the root update function.
#[derive(Debug, Clone)]
pub enum DomainMessage {
    Auth(auth::Message),
}
