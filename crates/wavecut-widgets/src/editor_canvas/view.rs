//! Editor view function
//!
//! ```ignore
//! fn view(&self) -> Element<Message> {
//!     let canvas = waveform_editor(&self.editor, Message::Editor);
//!     container(canvas).height(Length::Fixed(240.0)).into()
//! }
//! ```

use iced::widget::Canvas;
use iced::{Element, Length};
use wavecut_core::WaveformEditor;

use super::canvas::EditorCanvas;
use super::EditorEvent;

/// Create the interactive editor canvas for `editor`
///
/// The canvas fills its parent; size it with a surrounding container.
/// `on_event` is called for every pointer event the canvas reports.
pub fn waveform_editor<'a, Message>(
    editor: &'a WaveformEditor,
    on_event: impl Fn(EditorEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(EditorCanvas { editor, on_event })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
