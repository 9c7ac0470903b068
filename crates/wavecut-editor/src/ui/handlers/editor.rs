//! Editor canvas message handlers
//!
//! Handles: Editor(PointerDown | PointerMoved | PointerUp)

use iced::Task;
use wavecut_widgets::EditorEvent;

use super::super::app::WavecutApp;
use super::super::message::Message;

impl WavecutApp {
    /// Handle Editor message
    pub fn handle_editor_event(&mut self, event: EditorEvent) -> Task<Message> {
        match event {
            EditorEvent::PointerDown { x, width } => {
                if self.domain.pointer_down(x, width) {
                    log::debug!("Divider grabbed: {:?}", self.domain.editor().dividers().active_drag());
                }
            }
            EditorEvent::PointerMoved { x, width } => {
                self.domain.pointer_moved(x, width);
            }
            EditorEvent::PointerUp => {
                if self.domain.pointer_up() {
                    self.persist_session();
                }
            }
        }
        Task::none()
    }
}
