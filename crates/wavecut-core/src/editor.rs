//! Waveform editor state
//!
//! Pairs the currently displayed sample sequence with the divider controller.
//! Loading a new sequence always resets the dividers, so a selection made on
//! one file never leaks onto another.

use std::sync::Arc;

use crate::divider::{DividerController, DividerDefaults, DividerSnapshot, DragTarget};
use crate::envelope::{build_outline, Outline};
use crate::types::{export_allowed, ExportRange, Sample};

/// Editor state for one displayed waveform
///
/// Samples are held behind an `Arc` so the UI and background export tasks can
/// share them without copying.
#[derive(Debug, Clone)]
pub struct WaveformEditor {
    samples: Arc<[Sample]>,
    dividers: DividerController,
}

impl Default for WaveformEditor {
    fn default() -> Self {
        Self::new(DividerDefaults::default())
    }
}

impl WaveformEditor {
    /// Create an empty editor with the given divider defaults
    pub fn new(defaults: DividerDefaults) -> Self {
        Self {
            samples: Arc::from(Vec::<Sample>::new()),
            dividers: DividerController::new(defaults),
        }
    }

    /// Replace the displayed sequence and reset the dividers
    pub fn load(&mut self, samples: impl Into<Arc<[Sample]>>) {
        self.samples = samples.into();
        self.dividers.reset();
        log::debug!("load: {} samples, dividers reset", self.samples.len());
    }

    /// Drop the displayed sequence
    pub fn clear(&mut self) {
        self.load(Vec::<Sample>::new());
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Shared handle to the samples (for background work)
    pub fn shared_samples(&self) -> Arc<[Sample]> {
        Arc::clone(&self.samples)
    }

    pub fn dividers(&self) -> &DividerController {
        &self.dividers
    }

    /// Envelope outline for a `width` x `height` surface
    pub fn outline(&self, width: f32, height: f32) -> Outline {
        build_outline(&self.samples, width, height)
    }

    /// Pixel x positions of the left and right markers on a surface `width` wide
    pub fn marker_positions(&self, width: f32) -> (f32, f32) {
        (self.dividers.left() * width, self.dividers.right() * width)
    }

    pub fn hit_test(&self, x: f32, width: f32) -> DragTarget {
        if width > 0.0 {
            self.dividers.hit_test(x / width)
        } else {
            DragTarget::None
        }
    }

    pub fn pointer_down(&mut self, x: f32, width: f32) -> bool {
        self.dividers.on_pointer_down(x, width)
    }

    pub fn pointer_moved(&mut self, x: f32, width: f32) -> bool {
        self.dividers.on_pointer_move(x, width)
    }

    pub fn pointer_up(&mut self) {
        self.dividers.on_pointer_up();
    }

    pub fn is_dragging(&self) -> bool {
        self.dividers.active_drag().is_active()
    }

    /// Index range selected by the dividers over the displayed sequence
    pub fn export_range(&self) -> ExportRange {
        self.dividers.export_range(self.samples.len())
    }

    /// Samples selected by the dividers
    pub fn export_slice(&self) -> Vec<Sample> {
        self.export_range().slice(&self.samples).to_vec()
    }

    /// Whether the displayed sequence is long enough to export
    pub fn can_export(&self) -> bool {
        export_allowed(self.samples.len())
    }

    pub fn divider_snapshot(&self) -> DividerSnapshot {
        self.dividers.snapshot()
    }

    /// Re-apply saved divider positions (falls back to defaults if invalid)
    pub fn restore_dividers(&mut self, snapshot: DividerSnapshot) -> bool {
        self.dividers.restore(snapshot)
    }
}
