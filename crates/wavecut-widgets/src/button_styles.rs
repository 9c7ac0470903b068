//! Button styling for list entries and actions
//!
//! Raised look when idle, pressed-in look while held or selected.

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use crate::theme::ACCENT_COLOR;

/// Default button background color
pub const DEFAULT_BG: Color = Color::from_rgb(0.25, 0.25, 0.25);

/// List entry background when not selected
const LIST_BG: Color = Color::from_rgb(0.16, 0.16, 0.18);

fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn raised_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base_color, 0.1),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(2.0, 2.0),
            blur_radius: 3.0,
        },
        snap: false,
    }
}

fn pressed_style(base_color: Color) -> Style {
    Style {
        background: Some(Background::Color(darken(base_color, 0.15))),
        text_color: Color::WHITE,
        border: Border {
            color: darken(base_color, 0.2),
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

fn disabled_style() -> Style {
    Style {
        background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
        text_color: Color::from_rgb(0.5, 0.5, 0.5),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style for action buttons (export, refresh)
///
/// Use with `.style(|_, status| action_style(status))`
pub fn action_style(status: Status) -> Style {
    match status {
        Status::Active => raised_style(DEFAULT_BG),
        Status::Hovered => raised_style(lighten(DEFAULT_BG, 0.08)),
        Status::Pressed => pressed_style(DEFAULT_BG),
        Status::Disabled => disabled_style(),
    }
}

/// Style for a catalog list entry; the selected entry stays pressed in
pub fn list_entry_style(status: Status, is_selected: bool) -> Style {
    if is_selected {
        return pressed_style(ACCENT_COLOR);
    }

    let mut style = match status {
        Status::Hovered => raised_style(lighten(LIST_BG, 0.06)),
        Status::Pressed => pressed_style(LIST_BG),
        Status::Active | Status::Disabled => raised_style(LIST_BG),
    };
    style.shadow = Shadow::default();
    style
}
