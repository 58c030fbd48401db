use iced::{Settings, Task, Theme};

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the Hearth application using the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("Hearth", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(app_theme)
        .window(iced::window::Settings {
            size: iced::Size::new(960.0, 640.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || (bootstrap::base_state(&config), Task::none()))
}

fn default_settings() -> Settings {
    Settings {
        id: Some("hearth-desktop".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    Theme::TokyoNight
}
