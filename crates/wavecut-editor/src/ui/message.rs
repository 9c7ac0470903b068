//! Application messages
//!
//! All message types that can be dispatched in the wavecut application.

use std::sync::Arc;

use wavecut_core::{Sample, WaveformEntry};
use wavecut_widgets::EditorEvent;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Library
    RefreshCatalog,
    SelectWaveform(WaveformEntry),
    /// Background load finished (entry identifies which request it answers)
    WaveformLoaded(WaveformEntry, Result<Arc<[Sample]>, String>),

    // Editor
    Editor(EditorEvent),

    // Export
    Export,
    ExportComplete(Result<WaveformEntry, String>),
}
