//! Library message handlers
//!
//! Handles: RefreshCatalog, SelectWaveform, WaveformLoaded

use std::sync::Arc;

use iced::Task;
use wavecut_core::{Sample, WaveformCatalog, WaveformEntry};

use super::super::app::WavecutApp;
use super::super::message::Message;

impl WavecutApp {
    /// Handle RefreshCatalog message
    ///
    /// The first refresh also reselects the entry from the saved session.
    pub fn handle_refresh_catalog(&mut self) -> Task<Message> {
        self.domain.refresh_catalog();
        match self.domain.reselect_last() {
            Some(entry) => {
                log::info!("Restoring session selection: {}", entry.name);
                self.load_entry(entry)
            }
            None => Task::none(),
        }
    }

    /// Handle SelectWaveform message
    pub fn handle_select_waveform(&mut self, entry: WaveformEntry) -> Task<Message> {
        let entry = self.domain.select(entry);
        self.persist_session();
        self.load_entry(entry)
    }

    /// Handle WaveformLoaded message
    pub fn handle_waveform_loaded(
        &mut self,
        entry: WaveformEntry,
        result: Result<Arc<[Sample]>, String>,
    ) -> Task<Message> {
        if self.domain.apply_loaded(&entry, result) {
            // Restore may have discarded saved dividers
            self.persist_session();
        }
        Task::none()
    }

    /// Read `entry` on the blocking pool and report back with WaveformLoaded
    fn load_entry(&self, entry: WaveformEntry) -> Task<Message> {
        let catalog = self.domain.catalog();
        Task::perform(
            async move {
                let request = entry.clone();
                let result = tokio::task::spawn_blocking(
                    move || -> Result<Arc<[Sample]>, String> {
                        catalog
                            .load(&request)
                            .map(Arc::from)
                            .map_err(|e| e.to_string())
                    },
                )
                .await
                .unwrap_or_else(|e| Err(format!("Load task failed: {}", e)));
                (entry, result)
            },
            |(entry, result)| Message::WaveformLoaded(entry, result),
        )
    }
}
