//! Wavecut Widgets - iced UI components for waveform editing
//!
//! Follows the iced 0.14 pattern used across the workspace:
//!
//! - **State** lives in `wavecut_core` (`WaveformEditor`, `WaveformEntry`)
//! - **View functions** take state + callbacks and return `Element<Message>`
//! - **Canvas Programs** render and translate input into callback messages

pub mod button_styles;
pub mod editor_canvas;
pub mod theme;
pub mod waveform_list;

pub use editor_canvas::{waveform_editor, EditorCanvas, EditorEvent, EditorInteraction};
pub use waveform_list::waveform_list;
