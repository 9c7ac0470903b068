//! Wavecut Core - waveform geometry, range selection and catalog
//!
//! Everything here is UI-agnostic: the widgets crate draws what
//! [`envelope`] builds and feeds pointer input into [`divider`].

pub mod catalog;
pub mod config;
pub mod divider;
pub mod editor;
pub mod envelope;
pub mod session;
pub mod types;
pub mod waveform_file;

pub use catalog::{CatalogCache, CatalogError, EntryOrigin, FilesystemCatalog, WaveformCatalog, WaveformEntry};
pub use divider::{DividerController, DividerDefaults, DividerSnapshot, DragTarget, MIN_GAP, TOUCH_TOLERANCE};
pub use editor::WaveformEditor;
pub use envelope::{build_outline, Outline, OutlinePoint};
pub use session::Session;
pub use types::*;
