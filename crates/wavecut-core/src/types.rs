//! Common types for wavecut
//!
//! The fundamental data shared by the editor, the catalog and the UI:
//! one envelope sample per time step, plus the index range used for export.

use serde::{Deserialize, Serialize};

/// Minimum number of samples a waveform must exceed before export is offered
///
/// A sequence of exactly this length (or shorter) disables export.
pub const MIN_SAMPLES_FOR_EXPORT: usize = 3;

/// Lower/upper envelope extent at one time step
///
/// Both values are conventionally in `[-1, 1]`, where `1` is the visual top
/// of the drawing surface. Values outside that range are accepted and simply
/// map outside the visible area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub bottom: f64,
    pub top: f64,
}

impl Sample {
    /// Create a new sample
    #[inline]
    pub fn new(bottom: f64, top: f64) -> Self {
        Self { bottom, top }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((bottom, top): (f64, f64)) -> Self {
        Self { bottom, top }
    }
}

/// Half-open index range `[start_index, end_index)` into a sample sequence
///
/// Recomputed on demand from the divider positions; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl ExportRange {
    /// Number of samples covered (0 when `end_index <= start_index`)
    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// Whether the range selects nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slice `samples` by this range, clamping both ends to the slice length
    pub fn slice<'a>(&self, samples: &'a [Sample]) -> &'a [Sample] {
        let end = self.end_index.min(samples.len());
        let start = self.start_index.min(end);
        &samples[start..end]
    }
}

/// Whether a sequence of `len` samples is long enough to export
pub fn export_allowed(len: usize) -> bool {
    len > MIN_SAMPLES_FOR_EXPORT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_gating_boundary() {
        assert!(!export_allowed(0));
        assert!(!export_allowed(3), "3 samples must disable export");
        assert!(export_allowed(4), "4 samples must enable export");
    }

    #[test]
    fn test_range_len_never_underflows() {
        let inverted = ExportRange { start_index: 5, end_index: 3 };
        assert_eq!(inverted.len(), 0);
        assert!(inverted.is_empty());
    }

    #[test]
    fn test_slice_clamps_to_sequence() {
        let samples: Vec<Sample> = (0..4).map(|i| Sample::new(-(i as f64), i as f64)).collect();

        let range = ExportRange { start_index: 2, end_index: 10 };
        assert_eq!(range.slice(&samples), &samples[2..4]);

        let past_end = ExportRange { start_index: 7, end_index: 9 };
        assert!(past_end.slice(&samples).is_empty());
    }
}
