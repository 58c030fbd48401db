//! Root view composition.

use crate::common::messages::DomainMessage;
use crate::domains::auth::types::AuthFlow;
use crate::domains::ui::views;
use crate::state::State;
use iced::Element;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let screen = match &state.auth.flow {
        AuthFlow::SignIn {
            email,
            password,
            show_password,
            submitting,
        } => views::auth::view_sign_in(
            email,
            password,
            *show_password,
            *submitting,
        ),
        AuthFlow::Authenticated { account, .. } => {
            views::overview::view_overview(account)
        }
    };

    match &state.auth.alert {
        Some(alert) => views::alert::alert_modal(screen, alert),
        None => screen,
    }
}
