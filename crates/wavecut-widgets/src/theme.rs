//! Shared theme constants for wavecut UI components

use iced::Color;

/// Canvas background behind the envelope
pub const CANVAS_BG: Color = Color::from_rgb(0.1, 0.1, 0.12);

/// Envelope fill (#33CC66)
pub const ENVELOPE_COLOR: Color = Color::from_rgb(0.2, 0.8, 0.4);

/// Divider marker fill
pub const HANDLE_COLOR: Color = Color::from_rgb(1.0, 0.6, 0.0);

/// Divider marker fill while dragged
pub const HANDLE_ACTIVE_COLOR: Color = Color::from_rgb(1.0, 0.8, 0.3);

/// Area outside the selected range is dimmed with this overlay
pub const OUTSIDE_SELECTION_SHADE: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);

/// Secondary text (placeholders, tags)
pub const TEXT_SECONDARY: Color = Color::from_rgb(0.6, 0.6, 0.6);

/// Accent for exported entries and status messages
pub const ACCENT_COLOR: Color = Color::from_rgb(0.3, 0.6, 0.9);

/// Error status text
pub const ERROR_COLOR: Color = Color::from_rgb(0.9, 0.35, 0.3);
