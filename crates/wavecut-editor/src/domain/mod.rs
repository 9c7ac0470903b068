//! Domain layer for wavecut
//!
//! Owns the catalog, the current selection and the waveform editor, and
//! sequences loading, selection and export for the UI. The UI layer only
//! renders state from here and forwards user input; it never touches the
//! catalog directly.
//!
//! Slow work (loading and saving files) is split into two halves so it can
//! run off the UI thread:
//!
//! ```text
//! select(entry) ──► catalog().load(entry) ──► apply_loaded(entry, result)
//! export_selection() ──► catalog().save(samples) ──► apply_exported(result)
//! ```

mod state;

use std::sync::Arc;

use wavecut_core::{
    CatalogCache, CatalogError, DividerDefaults, DividerSnapshot, Sample, Session,
    WaveformCatalog, WaveformEditor, WaveformEntry,
};

pub use state::Selection;

/// Domain layer for the wavecut editor
pub struct EditorDomain<C> {
    /// Catalog with cached listing (shared with background tasks)
    catalog: CatalogCache<Arc<C>>,

    /// Last successful listing
    entries: Vec<WaveformEntry>,

    /// Current selection, set before its samples arrive
    selection: Option<Selection>,

    /// Displayed samples and divider state
    editor: WaveformEditor,

    /// Human-readable outcome of the last operation
    status: String,

    /// Persisted selection and divider positions
    session: Session,

    /// Whether the saved session still has to be reselected
    restore_pending: bool,
}

impl<C: WaveformCatalog> EditorDomain<C> {
    // ═══════════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a domain around `catalog`
    ///
    /// `session` is remembered for [`reselect_last`](Self::reselect_last);
    /// nothing is loaded until the catalog is refreshed.
    pub fn new(catalog: C, defaults: DividerDefaults, session: Session) -> Self {
        let restore_pending = session.last_selected.is_some();
        Self {
            catalog: CatalogCache::new(Arc::new(catalog)),
            entries: Vec::new(),
            selection: None,
            editor: WaveformEditor::new(defaults),
            status: String::new(),
            session,
            restore_pending,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Observable state
    // ═══════════════════════════════════════════════════════════════════════

    pub fn entries(&self) -> &[WaveformEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&WaveformEntry> {
        self.selection.as_ref().map(|s| &s.entry)
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn editor(&self) -> &WaveformEditor {
        &self.editor
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Shared catalog handle for background loads and saves
    pub fn catalog(&self) -> Arc<C> {
        Arc::clone(self.catalog.catalog())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Catalog
    // ═══════════════════════════════════════════════════════════════════════

    /// Re-list the catalog
    ///
    /// On failure the previous list stays and the status reports the error.
    pub fn refresh_catalog(&mut self) -> bool {
        self.catalog.invalidate();
        match self.catalog.entries() {
            Ok(entries) => {
                self.entries = entries.to_vec();
                log::info!("refresh_catalog: {} entries", self.entries.len());
                true
            }
            Err(e) => {
                log::error!("refresh_catalog: {}", e);
                self.status = format!("Failed to list waveforms: {}", e);
                false
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Selection & loading
    // ═══════════════════════════════════════════════════════════════════════

    /// Mark `entry` as selected and return it for loading
    ///
    /// The editor keeps showing the previous samples until
    /// [`apply_loaded`](Self::apply_loaded) runs for this entry.
    pub fn select(&mut self, entry: WaveformEntry) -> WaveformEntry {
        log::info!("select: {}", entry.name);
        self.session.select(&entry.name);
        self.selection = Some(Selection::new(entry.clone()));
        entry
    }

    /// Reselect the entry remembered by the session, once
    ///
    /// Returns the entry to load if it is still in the catalog. Its saved
    /// divider positions are applied when the load completes.
    pub fn reselect_last(&mut self) -> Option<WaveformEntry> {
        if !std::mem::take(&mut self.restore_pending) {
            return None;
        }

        let name = self.session.last_selected.clone()?;
        let Some(entry) = self.entries.iter().find(|e| e.name == name).cloned() else {
            log::info!("reselect_last: {} is no longer in the catalog", name);
            return None;
        };

        let snapshot = self.session.dividers;
        let entry = self.select(entry);
        // select() drops dividers only when the name changes, so the session
        // still holds the snapshot here
        if let Some(selection) = self.selection.as_mut() {
            selection.pending_restore = snapshot;
        }
        Some(entry)
    }

    /// Apply the result of loading `entry`
    ///
    /// Results for anything but the current selection are dropped. Returns
    /// true if the editor now shows `entry`.
    pub fn apply_loaded(
        &mut self,
        entry: &WaveformEntry,
        result: Result<Arc<[Sample]>, String>,
    ) -> bool {
        let Some(selection) = self.selection.as_mut().filter(|s| s.matches(entry)) else {
            log::debug!("apply_loaded: dropping stale load of {}", entry.name);
            return false;
        };

        match result {
            Ok(samples) => {
                self.editor.load(samples);
                selection.loaded = true;
                // Loading reset the dividers; the session keeps positions only
                // when a saved snapshot was applied
                match selection.pending_restore.take() {
                    Some(snapshot) if self.editor.restore_dividers(snapshot) => {}
                    _ => self.session.dividers = None,
                }
                self.status = format!("{} ({} samples)", entry.name, self.editor.samples().len());
                true
            }
            Err(e) => {
                log::error!("apply_loaded: {}: {}", entry.name, e);
                self.status = format!("Failed to load {}: {}", entry.name, e);
                false
            }
        }
    }

    /// Load the current selection on the calling thread
    pub fn load_selected_now(&mut self) -> Result<(), CatalogError> {
        let Some(entry) = self.selected().cloned() else {
            return Ok(());
        };
        match self.catalog.load(&entry) {
            Ok(samples) => {
                self.apply_loaded(&entry, Ok(samples.into()));
                Ok(())
            }
            Err(e) => {
                self.apply_loaded(&entry, Err(e.to_string()));
                Err(e)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Divider input
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pointer_down(&mut self, x: f32, width: f32) -> bool {
        self.editor.pointer_down(x, width)
    }

    pub fn pointer_moved(&mut self, x: f32, width: f32) -> bool {
        self.editor.pointer_moved(x, width)
    }

    /// End a pointer gesture
    ///
    /// Returns true if a drag ended, in which case the session now holds the
    /// new divider positions.
    pub fn pointer_up(&mut self) -> bool {
        let was_dragging = self.editor.is_dragging();
        self.editor.pointer_up();
        if was_dragging {
            self.session.dividers = Some(self.editor.divider_snapshot());
        }
        was_dragging
    }

    /// Apply explicit divider positions (invalid positions reset to defaults)
    pub fn restore_dividers(&mut self, snapshot: DividerSnapshot) -> bool {
        let applied = self.editor.restore_dividers(snapshot);
        self.session.dividers = applied.then_some(snapshot);
        applied
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    /// Whether the export action should be offered
    pub fn can_export(&self) -> bool {
        self.selection.as_ref().is_some_and(|s| s.loaded) && self.editor.can_export()
    }

    /// Samples between the dividers, or `None` when export is unavailable
    pub fn export_selection(&self) -> Option<Vec<Sample>> {
        if !self.can_export() {
            return None;
        }
        let range = self.editor.export_range();
        log::info!(
            "export_selection: samples {}..{} of {}",
            range.start_index,
            range.end_index,
            self.editor.samples().len()
        );
        Some(self.editor.export_slice())
    }

    /// Apply the result of saving an export
    pub fn apply_exported(&mut self, result: Result<WaveformEntry, String>) {
        match result {
            Ok(entry) => {
                log::info!("apply_exported: saved {:?}", entry.path);
                self.refresh_catalog();
                self.status = format!("Exported {}", entry.name);
            }
            Err(e) => {
                log::error!("apply_exported: {}", e);
                self.status = format!("Export failed: {}", e);
            }
        }
    }

    /// Export the selection on the calling thread
    ///
    /// Returns `Ok(None)` when export is unavailable.
    pub fn export_now(&mut self) -> Result<Option<WaveformEntry>, CatalogError> {
        let Some(samples) = self.export_selection() else {
            return Ok(None);
        };
        match self.catalog.save(&samples) {
            Ok(entry) => {
                self.apply_exported(Ok(entry.clone()));
                Ok(Some(entry))
            }
            Err(e) => {
                self.apply_exported(Err(e.to_string()));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use wavecut_core::EntryOrigin;

    /// In-memory catalog for exercising the domain without a filesystem
    #[derive(Default)]
    struct MemoryCatalog {
        waveforms: Mutex<Vec<(WaveformEntry, Vec<Sample>)>>,
        fail_listing: AtomicBool,
    }

    impl MemoryCatalog {
        fn with(waveforms: &[(&str, usize)]) -> Self {
            let catalog = Self::default();
            {
                let mut stored = catalog.waveforms.lock().unwrap();
                for (name, len) in waveforms {
                    stored.push((entry(name, EntryOrigin::Bundled), ramp(*len)));
                }
            }
            catalog
        }
    }

    impl WaveformCatalog for MemoryCatalog {
        fn list(&self) -> Result<Vec<WaveformEntry>, CatalogError> {
            if self.fail_listing.load(Ordering::SeqCst) {
                return Err(CatalogError::Listing {
                    path: PathBuf::from("memory"),
                    source: std::io::Error::other("listing disabled"),
                });
            }
            Ok(self.waveforms.lock().unwrap().iter().map(|(e, _)| e.clone()).collect())
        }

        fn load(&self, wanted: &WaveformEntry) -> Result<Vec<Sample>, CatalogError> {
            self.waveforms
                .lock()
                .unwrap()
                .iter()
                .find(|(e, _)| e == wanted)
                .map(|(_, samples)| samples.clone())
                .ok_or_else(|| CatalogError::Listing {
                    path: wanted.path.clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }

        fn save(&self, samples: &[Sample]) -> Result<WaveformEntry, CatalogError> {
            if samples.is_empty() {
                return Err(CatalogError::EmptyExport);
            }
            let mut stored = self.waveforms.lock().unwrap();
            let saved = entry(&format!("export-{}", stored.len()), EntryOrigin::Exported);
            stored.push((saved.clone(), samples.to_vec()));
            Ok(saved)
        }
    }

    fn entry(name: &str, origin: EntryOrigin) -> WaveformEntry {
        WaveformEntry {
            name: name.to_string(),
            origin,
            path: PathBuf::from(format!("{name}.txt")),
        }
    }

    fn ramp(n: usize) -> Vec<Sample> {
        (0..n).map(|i| Sample::new(-(i as f64), i as f64)).collect()
    }

    fn domain(waveforms: &[(&str, usize)]) -> EditorDomain<MemoryCatalog> {
        let mut domain = EditorDomain::new(
            MemoryCatalog::with(waveforms),
            DividerDefaults::default(),
            Session::default(),
        );
        assert!(domain.refresh_catalog());
        domain
    }

    #[test]
    fn test_selection_precedes_samples() {
        let mut domain = domain(&[("kick", 10), ("snare", 10)]);
        let kick = domain.entries()[0].clone();

        domain.select(kick.clone());
        assert_eq!(domain.selected(), Some(&kick));
        assert!(domain.editor().samples().is_empty());
        assert!(!domain.can_export());

        domain.load_selected_now().unwrap();
        assert_eq!(domain.editor().samples().len(), 10);
        assert!(domain.can_export());
    }

    #[test]
    fn test_stale_load_is_dropped() {
        let mut domain = domain(&[("kick", 10), ("snare", 20)]);
        let kick = domain.entries()[0].clone();
        let snare = domain.entries()[1].clone();

        domain.select(kick.clone());
        domain.select(snare.clone());

        assert!(!domain.apply_loaded(&kick, Ok(ramp(10).into())));
        assert!(domain.editor().samples().is_empty());

        assert!(domain.apply_loaded(&snare, Ok(ramp(20).into())));
        assert_eq!(domain.editor().samples().len(), 20);
    }

    #[test]
    fn test_failed_load_keeps_editor() {
        let mut domain = domain(&[("kick", 10), ("snare", 20)]);
        let kick = domain.entries()[0].clone();
        let snare = domain.entries()[1].clone();

        domain.select(kick);
        domain.load_selected_now().unwrap();

        domain.select(snare.clone());
        assert!(!domain.apply_loaded(&snare, Err("disk on fire".to_string())));
        assert_eq!(domain.editor().samples().len(), 10);
        assert!(domain.status().contains("disk on fire"));
    }

    #[test]
    fn test_loading_resets_dividers() {
        let mut domain = domain(&[("kick", 10), ("snare", 20)]);
        let kick = domain.entries()[0].clone();
        let snare = domain.entries()[1].clone();

        domain.select(kick);
        domain.load_selected_now().unwrap();
        assert!(domain.pointer_down(0.0, 100.0));
        domain.pointer_moved(50.0, 100.0);
        assert!(domain.pointer_up());
        assert_eq!(domain.editor().dividers().left(), 0.5);

        domain.select(snare);
        domain.load_selected_now().unwrap();
        assert_eq!(domain.editor().dividers().left(), 0.0);
        assert_eq!(domain.editor().dividers().right(), 1.0);
    }

    #[test]
    fn test_export_gated_on_sample_count() {
        let mut domain = domain(&[("tiny", 3), ("small", 4)]);
        let tiny = domain.entries()[0].clone();
        let small = domain.entries()[1].clone();

        assert!(domain.export_selection().is_none());

        domain.select(tiny);
        domain.load_selected_now().unwrap();
        assert!(domain.export_selection().is_none());
        assert_eq!(domain.export_now().unwrap(), None);

        domain.select(small);
        domain.load_selected_now().unwrap();
        assert_eq!(domain.export_selection().unwrap().len(), 4);
    }

    #[test]
    fn test_export_slices_and_relists() {
        let mut domain = domain(&[("kick", 10)]);
        let kick = domain.entries()[0].clone();
        domain.select(kick);
        domain.load_selected_now().unwrap();
        domain.restore_dividers(DividerSnapshot { left: 0.2, right: 0.8 });

        let saved = domain.export_now().unwrap().unwrap();
        assert!(saved.is_exported());
        assert_eq!(domain.entries().len(), 2);
        assert!(domain.entries().contains(&saved));
        assert_eq!(domain.catalog().load(&saved).unwrap(), ramp(10)[2..8].to_vec());
        assert!(domain.status().contains(&saved.name));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_list() {
        let mut domain = domain(&[("kick", 10)]);
        domain.catalog().fail_listing.store(true, Ordering::SeqCst);

        assert!(!domain.refresh_catalog());
        assert_eq!(domain.entries().len(), 1);
        assert!(domain.status().starts_with("Failed to list"));
    }

    #[test]
    fn test_session_restores_selection_and_dividers() {
        let session = Session {
            last_selected: Some("snare".to_string()),
            dividers: Some(DividerSnapshot { left: 0.3, right: 0.6 }),
        };
        let mut domain = EditorDomain::new(
            MemoryCatalog::with(&[("kick", 10), ("snare", 10)]),
            DividerDefaults::default(),
            session,
        );
        domain.refresh_catalog();

        let entry = domain.reselect_last().unwrap();
        assert_eq!(entry.name, "snare");
        // Only once
        assert!(domain.reselect_last().is_none());

        domain.load_selected_now().unwrap();
        assert_eq!(domain.editor().dividers().left(), 0.3);
        assert_eq!(domain.editor().dividers().right(), 0.6);
    }

    #[test]
    fn test_session_ignores_vanished_entry() {
        let session = Session {
            last_selected: Some("gone".to_string()),
            dividers: None,
        };
        let mut domain = EditorDomain::new(
            MemoryCatalog::with(&[("kick", 10)]),
            DividerDefaults::default(),
            session,
        );
        domain.refresh_catalog();
        assert!(domain.reselect_last().is_none());
        assert!(domain.selected().is_none());
    }

    #[test]
    fn test_reloading_same_entry_clears_session_dividers() {
        let mut domain = domain(&[("kick", 10)]);
        let kick = domain.entries()[0].clone();
        domain.select(kick.clone());
        domain.load_selected_now().unwrap();

        assert!(domain.pointer_down(0.0, 100.0));
        domain.pointer_moved(40.0, 100.0);
        assert!(domain.pointer_up());
        assert_eq!(
            domain.session().dividers,
            Some(DividerSnapshot { left: 0.4, right: 1.0 })
        );

        domain.select(kick);
        domain.load_selected_now().unwrap();
        assert_eq!(domain.editor().dividers().left(), 0.0);
        assert_eq!(domain.editor().dividers().right(), 1.0);
        assert_eq!(domain.session().dividers, None);
    }

    #[test]
    fn test_drag_end_updates_session() {
        let mut domain = domain(&[("kick", 10)]);
        let kick = domain.entries()[0].clone();
        domain.select(kick);
        domain.load_selected_now().unwrap();

        // Release without a drag leaves the session alone
        assert!(!domain.pointer_down(50.0, 100.0));
        assert!(!domain.pointer_up());
        assert!(domain.session().dividers.is_none());

        assert!(domain.pointer_down(99.0, 100.0));
        domain.pointer_moved(70.0, 100.0);
        assert!(domain.pointer_up());
        assert_eq!(
            domain.session().dividers,
            Some(DividerSnapshot { left: 0.0, right: 0.7 })
        );
        assert_eq!(domain.session().last_selected.as_deref(), Some("kick"));
    }
}
