//! Interactive waveform editor canvas
//!
//! Draws the filled envelope of a [`WaveformEditor`] with its two divider
//! markers, and translates mouse input into [`EditorEvent`]s. The canvas never
//! mutates the editor itself: the application applies each event to its own
//! `WaveformEditor` in `update`.
//!
//! [`WaveformEditor`]: wavecut_core::WaveformEditor

mod canvas;
mod marker;
mod view;

pub use canvas::{EditorCanvas, EditorInteraction};
pub use marker::{left_marker, right_marker, MARKER_RELATIVE_WIDTH, MARKER_WEDGE_RELATIVE_SIZE};
pub use view::waveform_editor;

/// Pointer input on the editor canvas
///
/// `x` is relative to the canvas' left edge and may fall outside
/// `[0, width]` while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    PointerDown { x: f32, width: f32 },
    PointerMoved { x: f32, width: f32 },
    PointerUp,
}
