//! Handlers the auth update function dispatches to.

pub mod session;
pub mod sign_in;

pub use session::{
    handle_keep_alive_tick, handle_session_refreshed, handle_sign_out,
    handle_signed_out,
};
pub use sign_in::{
    handle_dismiss_alert, handle_email_changed, handle_password_changed,
    handle_sign_in_completed, handle_sign_up_completed, handle_submit_sign_in,
    handle_submit_sign_up, handle_toggle_password_visibility,
};
