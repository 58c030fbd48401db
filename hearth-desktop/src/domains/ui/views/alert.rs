//! Modal alert overlay.

use crate::common::messages::DomainMessage;
use crate::domains::auth::messages as auth;
use crate::domains::auth::types::Alert;
use crate::domains::ui::views::auth::components::primary_button;
use iced::{
    Alignment, Color, Element, Length, Theme,
    widget::{center, column, container, mouse_area, opaque, stack, text},
};

/// Lay the alert over `base`, dimming and blocking everything beneath it.
/// Clicking the backdrop or the confirm button dismisses it.
pub fn alert_modal<'a>(
    base: Element<'a, DomainMessage>,
    alert: &'a Alert,
) -> Element<'a, DomainMessage> {
    let card = container(
        column![
            text(alert.title.as_str())
                .size(20)
                .align_x(iced::alignment::Horizontal::Center),
            text(alert.message.as_str())
                .size(14)
                .align_x(iced::alignment::Horizontal::Center),
            primary_button("OK")
                .on_press(DomainMessage::Auth(auth::Message::DismissAlert)),
        ]
        .spacing(16)
        .align_x(Alignment::Center),
    )
    .width(Length::Fixed(360.0))
    .padding(24)
    .style(|theme: &Theme| {
        let palette = theme.extended_palette();
        container::Style {
            background: Some(palette.background.base.color.into()),
            border: iced::Border {
                color: palette.background.strong.color,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    });

    let backdrop = center(opaque(card)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.7,
                ..Color::BLACK
            }
            .into(),
        ),
        ..Default::default()
    });

    stack![
        base,
        opaque(
            mouse_area(backdrop)
                .on_press(DomainMessage::Auth(auth::Message::DismissAlert))
        )
    ]
    .into()
}
