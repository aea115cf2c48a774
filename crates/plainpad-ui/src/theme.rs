//! Colors and widget styles shared by the window regions.

use iced::widget::{button, container, text_editor};
use iced::{Background, Border, Color, Theme};

pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.25, 0.25, 0.28);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
}

/// Background for the toolbar and the status bar.
pub fn bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(colors::BG_MEDIUM)),
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Toolbar buttons.
pub fn toolbar_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_HOVER,
        button::Status::Pressed => colors::BG_ACTIVE,
        _ => colors::BG_MEDIUM,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: colors::TEXT_PRIMARY,
        border: Border {
            color: colors::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// The text area itself: flat, no border.
pub fn text_area(_theme: &Theme, _status: text_editor::Status) -> text_editor::Style {
    text_editor::Style {
        background: Background::Color(colors::BG_DARK),
        border: Border {
            width: 0.0,
            radius: 0.0.into(),
            color: Color::TRANSPARENT,
        },
        icon: colors::TEXT_MUTED,
        placeholder: colors::TEXT_MUTED,
        value: colors::TEXT_PRIMARY,
        selection: Color {
            a: 0.35,
            ..colors::ACCENT
        },
    }
}
