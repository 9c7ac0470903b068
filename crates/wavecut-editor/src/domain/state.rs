//! Domain-level selection state

use wavecut_core::{DividerSnapshot, WaveformEntry};

/// The currently selected catalog entry
///
/// Exists from the moment the user picks an entry, before its samples arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub entry: WaveformEntry,

    /// Whether the entry's samples are in the editor
    pub loaded: bool,

    /// Divider positions to apply once the samples arrive (session restore)
    pub pending_restore: Option<DividerSnapshot>,
}

impl Selection {
    pub fn new(entry: WaveformEntry) -> Self {
        Self {
            entry,
            loaded: false,
            pending_restore: None,
        }
    }

    /// Whether a load result for `entry` belongs to this selection
    pub fn matches(&self, entry: &WaveformEntry) -> bool {
        self.entry == *entry
    }
}
