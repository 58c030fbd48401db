//! Credential entry view: email, password, and the submit actions.

use super::components::{
    auth_card, auth_container, primary_button, secondary_button, spacing,
    title,
};
use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use crate::domains::auth::security::Passphrase;
use iced::{
    Alignment, Element, Length, Theme,
    widget::{Space, checkbox, column, text, text_input},
};

/// Shows the sign-in form.
pub fn view_sign_in<'a>(
    email: &'a str,
    password: &'a Passphrase,
    show_password: bool,
    submitting: bool,
) -> Element<'a, DomainMessage> {
    let mut content = column![
        title("Welcome back"),
        text("Sign in to manage your household budget")
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            })
            .align_x(iced::alignment::Horizontal::Center),
        spacing(),
    ];

    // Email input
    content = content.push(
        text_input("Email", email)
            .on_input(|value| {
                DomainMessage::Auth(auth::Message::EmailChanged(value))
            })
            .on_submit(DomainMessage::Auth(auth::Message::SubmitSignIn))
            .id(text_input::Id::new("sign-in-email"))
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );

    content = content.push(Space::with_height(Length::Fixed(8.0)));

    // Password input
    content = content.push(
        text_input("Password", password.as_str())
            .on_input(|value| {
                DomainMessage::Auth(auth::Message::PasswordChanged(value))
            })
            .on_submit(DomainMessage::Auth(auth::Message::SubmitSignIn))
            .secure(!show_password)
            .id(text_input::Id::new("sign-in-password"))
            .padding(12)
            .size(16)
            .width(Length::Fill),
    );

    content = content.push(Space::with_height(Length::Fixed(8.0)));

    // Password visibility toggle
    content = content.push(
        checkbox("Show password", show_password)
            .on_toggle(|_| {
                DomainMessage::Auth(auth::Message::TogglePasswordVisibility)
            })
            .size(16)
            .text_size(14)
            .spacing(8),
    );

    content = content.push(spacing());

    // Submit button; held back while a request is in flight
    let submit_label = if submitting { "Signing In..." } else { "Log In" };
    let submit_button = if submitting {
        primary_button(submit_label)
    } else {
        primary_button(submit_label)
            .on_press(DomainMessage::Auth(auth::Message::SubmitSignIn))
    };
    content = content.push(submit_button);

    content = content.push(Space::with_height(Length::Fixed(12.0)));

    // Sign-up path shares the form and the validation
    let sign_up_button = if submitting {
        secondary_button("Create Account")
    } else {
        secondary_button("Create Account")
            .on_press(DomainMessage::Auth(auth::Message::SubmitSignUp))
    };
    content = content.push(sign_up_button);

    let card = auth_card(content.align_x(Alignment::Center));
    auth_container(card).into()
}
