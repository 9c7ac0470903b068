//! Main application state and iced implementation

use std::path::PathBuf;

use iced::widget::{container, row};
use iced::{Element, Length, Task, Theme};
use wavecut_core::{FilesystemCatalog, Session};

use super::message::Message;
use crate::config::EditorConfig;
use crate::domain::EditorDomain;

/// Wavecut GUI application
pub struct WavecutApp {
    /// Catalog, selection and editor state
    pub(crate) domain: EditorDomain<FilesystemCatalog>,
    /// Loaded configuration (validated)
    pub(crate) config: EditorConfig,
    /// Where the session is persisted
    pub(crate) session_path: PathBuf,
    /// Whether an export is being written
    pub(crate) exporting: bool,
}

impl WavecutApp {
    /// Create the application from a loaded config
    ///
    /// Lists the catalog on the first update; the saved session is reselected
    /// once that listing is in.
    pub fn new(config: EditorConfig, session_path: PathBuf) -> (Self, Task<Message>) {
        let session = Session::load(&session_path);
        log::info!(
            "WavecutApp::new: last selection {:?}",
            session.last_selected
        );

        let domain = EditorDomain::new(config.catalog(), config.dividers, session);
        let app = Self {
            domain,
            config,
            session_path,
            exporting: false,
        };

        (app, Task::done(Message::RefreshCatalog))
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Library
            Message::RefreshCatalog => self.handle_refresh_catalog(),
            Message::SelectWaveform(entry) => self.handle_select_waveform(entry),
            Message::WaveformLoaded(entry, result) => self.handle_waveform_loaded(entry, result),

            // Editor
            Message::Editor(event) => self.handle_editor_event(event),

            // Export
            Message::Export => self.handle_export(),
            Message::ExportComplete(result) => self.handle_export_complete(result),
        }
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let browser = super::library_browser::view(
            self.domain.entries(),
            self.domain.selected(),
            self.config.display.list_width,
        );
        let editor = super::editor::view(
            &self.domain,
            self.config.display.editor_height,
            self.exporting,
        );

        container(row![browser, editor].spacing(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .into()
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Name of the selected waveform (for the window title)
    pub fn selected_name(&self) -> Option<&str> {
        self.domain.selected().map(|entry| entry.name.as_str())
    }

    /// Write the session file, logging failures
    pub(crate) fn persist_session(&self) {
        if let Err(e) = self.domain.session().save(&self.session_path) {
            log::warn!("persist_session: {:#}", e);
        }
    }
}
