//! Export message handlers
//!
//! Handles: Export, ExportComplete

use iced::Task;
use wavecut_core::{WaveformCatalog, WaveformEntry};

use super::super::app::WavecutApp;
use super::super::message::Message;

impl WavecutApp {
    /// Handle Export message
    ///
    /// Writes the selected range on the blocking pool. Ignored while another
    /// export is running or when the waveform is too short.
    pub fn handle_export(&mut self) -> Task<Message> {
        if self.exporting {
            return Task::none();
        }
        let Some(samples) = self.domain.export_selection() else {
            log::warn!("Export requested but not available");
            return Task::none();
        };

        self.exporting = true;
        let catalog = self.domain.catalog();
        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || {
                    catalog.save(&samples).map_err(|e| e.to_string())
                })
                .await
                .unwrap_or_else(|e| Err(format!("Export task failed: {}", e)))
            },
            Message::ExportComplete,
        )
    }

    /// Handle ExportComplete message
    pub fn handle_export_complete(&mut self, result: Result<WaveformEntry, String>) -> Task<Message> {
        self.exporting = false;
        self.domain.apply_exported(result);
        Task::none()
    }
}
