//! Root update dispatch.

use crate::common::messages::DomainMessage;
use crate::domains;
use crate::state::State;
use iced::Task;

pub fn update(
    state: &mut State,
    message: DomainMessage,
) -> Task<DomainMessage> {
    match message {
        DomainMessage::Auth(message) => {
            domains::auth::update::update_auth(state, message)
                .map(DomainMessage::Auth)
        }
    }
}
