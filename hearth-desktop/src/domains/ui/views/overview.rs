//! Post-login placeholder screen.
//!
//! The budgeting surfaces (accounts, transactions) live behind this screen
//! and are not part of this crate yet; for now it confirms the identity
//! and offers sign-out.

use super::auth::components::{
    auth_card, auth_container, secondary_button, spacing, title,
};
use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use hearth_model::Account;
use iced::{
    Alignment, Element, Theme,
    widget::{column, text},
};

pub fn view_overview(account: &Account) -> Element<'_, DomainMessage> {
    let mut content = column![
        title("You're signed in"),
        spacing(),
        text(account.display_label()).size(16),
    ];

    if let Some(created_at) = account.created_at {
        content = content.push(
            text(format!(
                "Member since {}",
                created_at.format("%B %e, %Y")
            ))
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().background.strong.text),
            }),
        );
    }

    content = content.push(spacing());
    content = content.push(
        secondary_button("Sign Out")
            .on_press(DomainMessage::Auth(auth::Message::SignOut)),
    );

    let card = auth_card(content.align_x(Alignment::Center));
    auth_container(card).into()
}
