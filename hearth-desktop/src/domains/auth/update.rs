//! Auth domain update dispatch.

use super::update_handlers::*;
use crate::domains::auth::messages as auth;
use crate::state::State;
use iced::Task;

pub fn update_auth(
    state: &mut State,
    message: auth::Message,
) -> Task<auth::Message> {
    match message {
        // Form editing
        auth::Message::EmailChanged(value) => {
            handle_email_changed(state, value)
        }
        auth::Message::PasswordChanged(value) => {
            handle_password_changed(state, value)
        }
        auth::Message::TogglePasswordVisibility => {
            handle_toggle_password_visibility(state)
        }

        // Submission
        auth::Message::SubmitSignIn => handle_submit_sign_in(state),
        auth::Message::SubmitSignUp => handle_submit_sign_up(state),
        auth::Message::SignInCompleted(result) => {
            handle_sign_in_completed(state, result)
        }
        auth::Message::SignUpCompleted(result) => {
            handle_sign_up_completed(state, result)
        }

        // Alerts
        auth::Message::DismissAlert => handle_dismiss_alert(state),

        // Session lifecycle
        auth::Message::KeepAliveTick => handle_keep_alive_tick(state),
        auth::Message::SessionRefreshed(result) => {
            handle_session_refreshed(state, result)
        }
        auth::Message::SignOut => handle_sign_out(state),
        auth::Message::SignedOut => handle_signed_out(state),
    }
}
