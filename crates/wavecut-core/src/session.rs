//! Editor session persistence
//!
//! Remembers the last selected waveform and its divider positions so the
//! editor reopens where the user left off. Stored as YAML next to the config.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::config::{load_config, save_config};
use crate::divider::DividerSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Name of the last selected catalog entry
    pub last_selected: Option<String>,
    /// Divider positions at the last drag end
    pub dividers: Option<DividerSnapshot>,
}

impl Session {
    /// Load a session, falling back to an empty one
    pub fn load(path: &Path) -> Self {
        load_config(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        save_config(self, path)
    }

    /// Record a new selection; old divider positions no longer apply
    pub fn select(&mut self, name: &str) {
        if self.last_selected.as_deref() != Some(name) {
            self.dividers = None;
        }
        self.last_selected = Some(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");

        let mut session = Session::default();
        session.select("kick");
        session.dividers = Some(DividerSnapshot { left: 0.25, right: 0.5 });
        session.save(&path).unwrap();

        assert_eq!(Session::load(&path), session);
    }

    #[test]
    fn test_new_selection_drops_dividers() {
        let mut session = Session::default();
        session.select("kick");
        session.dividers = Some(DividerSnapshot { left: 0.25, right: 0.5 });

        session.select("kick");
        assert!(session.dividers.is_some());

        session.select("snare");
        assert_eq!(session.last_selected.as_deref(), Some("snare"));
        assert!(session.dividers.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.yaml");
        std::fs::write(&path, "last_selected: hat\n").unwrap();

        let session = Session::load(&path);
        assert_eq!(session.last_selected.as_deref(), Some("hat"));
        assert!(session.dividers.is_none());
    }
}
