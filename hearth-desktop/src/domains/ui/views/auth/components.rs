//! Shared components for authentication views

use crate::common::messages::DomainMessage;
use iced::{
    Element, Length, Theme,
    widget::{Button, Container, Space, Text, button, container, text},
};

pub fn auth_container<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(iced::alignment::Horizontal::Center)
        .align_y(iced::alignment::Vertical::Center)
        .padding(20)
}

pub fn auth_card<'a>(
    content: impl Into<Element<'a, DomainMessage>>,
) -> Container<'a, DomainMessage> {
    container(content)
        .width(Length::Fixed(400.0))
        .padding(30)
        .style(|theme: &Theme| {
            let palette = theme.extended_palette();
            container::Style {
                background: Some(palette.background.weak.color.into()),
                border: iced::Border {
                    color: palette.background.strong.color,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            }
        })
}

pub fn title(label: &str) -> Text<'_> {
    text(label)
        .size(24)
        .align_x(iced::alignment::Horizontal::Center)
}

pub fn spacing() -> Space {
    Space::with_height(Length::Fixed(20.0))
}

/// Creates a primary button with consistent styling
pub fn primary_button(label: &str) -> Button<'_, DomainMessage> {
    button(
        text(label)
            .size(16)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([12, 24])
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        match status {
            button::Status::Active => button::Style {
                background: Some(palette.primary.base.color.into()),
                text_color: palette.primary.base.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Hovered => button::Style {
                background: Some(palette.primary.strong.color.into()),
                text_color: palette.primary.strong.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Pressed => button::Style {
                background: Some(palette.primary.weak.color.into()),
                text_color: palette.primary.weak.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
            button::Status::Disabled => button::Style {
                background: Some(palette.background.strong.color.into()),
                text_color: palette.background.strong.text,
                border: iced::Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    })
}

/// Creates a secondary (outline) button with consistent styling
pub fn secondary_button(label: &str) -> Button<'_, DomainMessage> {
    button(
        text(label)
            .size(16)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([12, 24])
    .style(|theme: &Theme, status| {
        let palette = theme.extended_palette();
        let border_color = match status {
            button::Status::Hovered | button::Status::Pressed => {
                palette.primary.base.color
            }
            _ => palette.background.strong.color,
        };
        button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: iced::Border {
                color: border_color,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    })
}
