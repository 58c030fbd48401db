//! Credential form handlers: field edits, validation, dispatch, and
//! completion of sign-in / sign-up submissions.

use std::sync::Arc;

use iced::Task;
use log::{debug, info, warn};

use crate::domains::auth::{
    messages as auth,
    security::Passphrase,
    types::{Alert, AuthFlow, Credentials},
    validation::email_is_valid,
};
use crate::infra::services::AuthApi;
use crate::state::{AuthState, State};
use hearth_model::AuthResponse;

const SIGN_IN_FAILED_TITLE: &str = "Sign In Failed";
const SIGN_UP_FAILED_TITLE: &str = "Sign Up Failed";

/// What a submit activation resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Submission {
    /// Nothing to do: no form on screen, or a request already in flight.
    Suppressed,
    /// Local validation failed; the alert has been raised.
    Invalid,
    /// Validation passed; these credentials go to the service.
    Dispatch(Credentials),
}

/// Validate the form and flip it into the submitting state.
///
/// The service call is issued if and only if this returns `Dispatch`; the
/// guard and the validation check both run synchronously here, before any
/// task is spawned.
pub(crate) fn prepare_submission(auth: &mut AuthState) -> Submission {
    let disposition = match &mut auth.flow {
        AuthFlow::SignIn {
            email,
            password,
            submitting,
            ..
        } => {
            if *submitting {
                debug!(
                    "[Auth] Submission ignored: a request is already in flight"
                );
                Submission::Suppressed
            } else if !email_is_valid(email) {
                info!("[Auth] Submission blocked by local email validation");
                Submission::Invalid
            } else {
                *submitting = true;
                Submission::Dispatch(Credentials {
                    email: email.clone(),
                    password: password.clone(),
                })
            }
        }
        AuthFlow::Authenticated { .. } => Submission::Suppressed,
    };

    if matches!(disposition, Submission::Invalid) {
        auth.raise_alert(Alert::invalid_email());
    }
    disposition
}

/// Forward the credentials to the service's password sign-in.
pub async fn dispatch_sign_in(
    api: Arc<dyn AuthApi>,
    credentials: Credentials,
) -> Result<AuthResponse, String> {
    api.sign_in_with_password(credentials)
        .await
        .map_err(|e| e.to_string())
}

/// Forward the credentials to the service's sign-up.
pub async fn dispatch_sign_up(
    api: Arc<dyn AuthApi>,
    credentials: Credentials,
) -> Result<AuthResponse, String> {
    api.sign_up(credentials).await.map_err(|e| e.to_string())
}

pub fn handle_email_changed(
    state: &mut State,
    value: String,
) -> Task<auth::Message> {
    if let AuthFlow::SignIn { email, .. } = &mut state.auth.flow {
        *email = value;
    }
    Task::none()
}

pub fn handle_password_changed(
    state: &mut State,
    value: String,
) -> Task<auth::Message> {
    if let AuthFlow::SignIn { password, .. } = &mut state.auth.flow {
        *password = Passphrase::new(value);
    }
    Task::none()
}

pub fn handle_toggle_password_visibility(
    state: &mut State,
) -> Task<auth::Message> {
    if let AuthFlow::SignIn { show_password, .. } = &mut state.auth.flow {
        *show_password = !*show_password;
    }
    Task::none()
}

/// Handle activation of the "Log In" control.
pub fn handle_submit_sign_in(state: &mut State) -> Task<auth::Message> {
    match prepare_submission(&mut state.auth) {
        Submission::Suppressed | Submission::Invalid => Task::none(),
        Submission::Dispatch(credentials) => {
            info!("[Auth] Submitting credentials for sign-in");
            let api = Arc::clone(&state.auth.api);
            Task::perform(
                dispatch_sign_in(api, credentials),
                auth::Message::SignInCompleted,
            )
        }
    }
}

/// Handle activation of the "Create Account" control.
pub fn handle_submit_sign_up(state: &mut State) -> Task<auth::Message> {
    match prepare_submission(&mut state.auth) {
        Submission::Suppressed | Submission::Invalid => Task::none(),
        Submission::Dispatch(credentials) => {
            info!("[Auth] Submitting credentials for sign-up");
            let api = Arc::clone(&state.auth.api);
            Task::perform(
                dispatch_sign_up(api, credentials),
                auth::Message::SignUpCompleted,
            )
        }
    }
}

/// Handle the settled sign-in call.
pub fn handle_sign_in_completed(
    state: &mut State,
    result: Result<AuthResponse, String>,
) -> Task<auth::Message> {
    // A completion for a submission this form no longer owns (the flow
    // moved on) is dropped rather than applied.
    if !state.auth.flow.is_submitting() {
        debug!("[Auth] Dropping sign-in completion: no submission in flight");
        return Task::none();
    }

    match result {
        Ok(AuthResponse {
            account: Some(account),
            session: Some(session),
        }) => {
            info!("[Auth] Signed in as {}", account.display_label());
            state.auth.flow = AuthFlow::Authenticated { account, session };
        }
        Ok(_) => {
            warn!("[Auth] Sign-in completed without a session");
            settle_with_alert(
                &mut state.auth,
                Alert::new(
                    SIGN_IN_FAILED_TITLE,
                    "Could not sign you in. Please try again.",
                ),
            );
        }
        Err(message) => {
            warn!("[Auth] Sign-in failed: {message}");
            settle_with_alert(
                &mut state.auth,
                Alert::new(SIGN_IN_FAILED_TITLE, message),
            );
        }
    }
    Task::none()
}

/// Handle the settled sign-up call.
pub fn handle_sign_up_completed(
    state: &mut State,
    result: Result<AuthResponse, String>,
) -> Task<auth::Message> {
    if !state.auth.flow.is_submitting() {
        debug!("[Auth] Dropping sign-up completion: no submission in flight");
        return Task::none();
    }

    match result {
        Ok(AuthResponse {
            account: Some(account),
            session: Some(session),
        }) => {
            info!(
                "[Auth] Account created and signed in as {}",
                account.display_label()
            );
            state.auth.flow = AuthFlow::Authenticated { account, session };
        }
        Ok(_) => {
            // The service created the account but withheld the session:
            // email confirmation is pending.
            info!("[Auth] Sign-up pending email confirmation");
            settle_with_alert(
                &mut state.auth,
                Alert::new(
                    "Confirm Your Email",
                    "Check your inbox to confirm your account before \
                     signing in.",
                ),
            );
        }
        Err(message) => {
            warn!("[Auth] Sign-up failed: {message}");
            settle_with_alert(
                &mut state.auth,
                Alert::new(SIGN_UP_FAILED_TITLE, message),
            );
        }
    }
    Task::none()
}

pub fn handle_dismiss_alert(state: &mut State) -> Task<auth::Message> {
    state.auth.alert = None;
    Task::none()
}

/// Return the form to idle and surface exactly one alert for this
/// submission.
fn settle_with_alert(auth: &mut AuthState, alert: Alert) {
    if let AuthFlow::SignIn { submitting, .. } = &mut auth.flow {
        *submitting = false;
    }
    auth.raise_alert(alert);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::stubs::{
        ScriptedOutcome, StubAuthApi, sample_account, sample_session,
    };
    use crate::state::State;
    use std::sync::Arc;

    fn state_with(api: &StubAuthApi) -> State {
        State::new(Arc::new(api.clone()))
    }

    fn fill_form(state: &mut State, email: &str, password: &str) {
        let _ = handle_email_changed(state, email.to_string());
        let _ = handle_password_changed(state, password.to_string());
    }

    fn granted_response() -> AuthResponse {
        AuthResponse {
            account: Some(sample_account()),
            session: Some(sample_session()),
        }
    }

    #[test]
    fn invalid_email_raises_alert_and_skips_dispatch() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "invalid-email", "123456");

        let _ = handle_submit_sign_in(&mut state);

        let alert = state.auth.alert.expect("alert should be raised");
        assert_eq!(alert.title, "Invalid Email");
        assert_eq!(alert.message, "Please enter a valid email address.");
        assert!(!state.auth.flow.is_submitting());
        assert!(api.sign_in_calls().is_empty());
    }

    #[test]
    fn malformed_addresses_never_reach_dispatch() {
        for email in ["plain", "no-dot@domain", "two words@example.com"] {
            let api = StubAuthApi::new();
            let mut state = state_with(&api);
            fill_form(&mut state, email, "123456");

            assert_eq!(
                prepare_submission(&mut state.auth),
                Submission::Invalid,
                "{email} should be blocked"
            );
            assert!(api.sign_in_calls().is_empty());
        }
    }

    #[test]
    fn valid_email_dispatches_verbatim_credentials() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "123456");

        let Submission::Dispatch(credentials) =
            prepare_submission(&mut state.auth)
        else {
            panic!("valid form should dispatch");
        };
        assert_eq!(credentials.email, "test@test.com");
        assert_eq!(credentials.password.as_str(), "123456");
        assert!(state.auth.flow.is_submitting());
        assert!(state.auth.alert.is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_suppressed() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "123456");

        assert!(matches!(
            prepare_submission(&mut state.auth),
            Submission::Dispatch(_)
        ));
        assert_eq!(
            prepare_submission(&mut state.auth),
            Submission::Suppressed
        );
        assert!(state.auth.alert.is_none());
    }

    #[tokio::test]
    async fn submit_issues_exactly_one_call_with_form_credentials() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "123456");

        let Submission::Dispatch(credentials) =
            prepare_submission(&mut state.auth)
        else {
            panic!("valid form should dispatch");
        };
        let result =
            dispatch_sign_in(Arc::clone(&state.auth.api), credentials).await;
        let _ = handle_sign_in_completed(&mut state, result);

        assert_eq!(
            api.sign_in_calls(),
            vec![("test@test.com".to_string(), "123456".to_string())]
        );
        assert!(matches!(
            state.auth.flow,
            AuthFlow::Authenticated { .. }
        ));
        assert!(state.auth.alert.is_none());
    }

    #[tokio::test]
    async fn rejected_sign_in_settles_with_a_single_alert() {
        let api = StubAuthApi::new().with_sign_in_outcome(
            ScriptedOutcome::Rejected("Invalid login credentials".into()),
        );
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "wrong-password");

        let Submission::Dispatch(credentials) =
            prepare_submission(&mut state.auth)
        else {
            panic!("valid form should dispatch");
        };
        let result =
            dispatch_sign_in(Arc::clone(&state.auth.api), credentials).await;
        let _ = handle_sign_in_completed(&mut state, result);

        let alert = state.auth.alert.expect("failure must not be silent");
        assert_eq!(alert.title, "Sign In Failed");
        assert_eq!(alert.message, "Invalid login credentials");
        assert!(!state.auth.flow.is_submitting());
        // One call was made and settling did not trigger another.
        assert_eq!(api.sign_in_calls().len(), 1);
    }

    #[test]
    fn completion_without_session_is_not_silent() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "123456");
        assert!(matches!(
            prepare_submission(&mut state.auth),
            Submission::Dispatch(_)
        ));

        let _ = handle_sign_in_completed(
            &mut state,
            Ok(AuthResponse {
                account: Some(sample_account()),
                session: None,
            }),
        );

        let alert = state.auth.alert.expect("failure must not be silent");
        assert_eq!(alert.title, "Sign In Failed");
        assert!(!state.auth.flow.is_submitting());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "test@test.com", "123456");

        // No submission in flight: the completion must be a no-op.
        let _ = handle_sign_in_completed(&mut state, Ok(granted_response()));

        assert!(matches!(
            state.auth.flow,
            AuthFlow::SignIn {
                submitting: false,
                ..
            }
        ));
        assert!(state.auth.alert.is_none());
    }

    #[tokio::test]
    async fn sign_up_without_session_asks_for_confirmation() {
        let api = StubAuthApi::new()
            .with_sign_up_outcome(ScriptedOutcome::Pending);
        let mut state = state_with(&api);
        fill_form(&mut state, "new@example.com", "123456");

        let Submission::Dispatch(credentials) =
            prepare_submission(&mut state.auth)
        else {
            panic!("valid form should dispatch");
        };
        let result =
            dispatch_sign_up(Arc::clone(&state.auth.api), credentials).await;
        let _ = handle_sign_up_completed(&mut state, result);

        assert_eq!(
            api.sign_up_calls(),
            vec![("new@example.com".to_string(), "123456".to_string())]
        );
        let alert = state.auth.alert.expect("pending sign-up must alert");
        assert_eq!(alert.title, "Confirm Your Email");
        assert!(!state.auth.flow.is_submitting());
    }

    #[test]
    fn keystrokes_replace_field_values() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);

        let _ = handle_email_changed(&mut state, "t".into());
        let _ = handle_email_changed(&mut state, "te".into());
        let _ = handle_password_changed(&mut state, "1".into());
        let _ = handle_password_changed(&mut state, "12".into());

        let AuthFlow::SignIn {
            email, password, ..
        } = &state.auth.flow
        else {
            panic!("form should be on screen");
        };
        assert_eq!(email, "te");
        assert_eq!(password.as_str(), "12");
    }

    #[test]
    fn dismiss_clears_the_alert() {
        let api = StubAuthApi::new();
        let mut state = state_with(&api);
        fill_form(&mut state, "invalid-email", "123456");
        let _ = handle_submit_sign_in(&mut state);
        assert!(state.auth.alert.is_some());

        let _ = handle_dismiss_alert(&mut state);
        assert!(state.auth.alert.is_none());
    }
}
