//! Waveform catalog
//!
//! Lists the waveforms available to the editor and stores exported selections.
//! Two sources feed the list: a read-only directory of bundled waveforms and
//! the user's export directory.
//!
//! ```text
//! ~/Music/wavecut/
//! ├── waveforms/   bundled, never written
//! └── exports/     export-YYYYmmdd-HHMMSS.txt
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::types::Sample;
use crate::waveform_file::{read_waveform, write_waveform, WaveformFileError};

/// Extension of waveform files, compared case-insensitively
const WAVEFORM_EXTENSION: &str = "txt";

/// Errors from catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading or writing a waveform file failed
    #[error(transparent)]
    File(#[from] WaveformFileError),

    /// Directory listing failed
    #[error("Failed to list '{path}': {source}")]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing to export
    #[error("Refusing to export an empty selection")]
    EmptyExport,
}

/// Where a catalog entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryOrigin {
    /// Shipped with the application (read-only)
    Bundled,
    /// Written by an earlier export
    Exported,
}

/// One listed waveform
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaveformEntry {
    /// Display name (file stem)
    pub name: String,
    pub origin: EntryOrigin,
    pub path: PathBuf,
}

impl WaveformEntry {
    pub fn is_exported(&self) -> bool {
        self.origin == EntryOrigin::Exported
    }
}

/// Source of waveforms for the editor
pub trait WaveformCatalog: Send + Sync {
    /// All available entries, bundled before exported
    fn list(&self) -> Result<Vec<WaveformEntry>, CatalogError>;

    /// Samples of one entry
    fn load(&self, entry: &WaveformEntry) -> Result<Vec<Sample>, CatalogError>;

    /// Store an exported selection and return its new entry
    fn save(&self, samples: &[Sample]) -> Result<WaveformEntry, CatalogError>;
}

impl<C: WaveformCatalog + ?Sized> WaveformCatalog for Arc<C> {
    fn list(&self) -> Result<Vec<WaveformEntry>, CatalogError> {
        (**self).list()
    }

    fn load(&self, entry: &WaveformEntry) -> Result<Vec<Sample>, CatalogError> {
        (**self).load(entry)
    }

    fn save(&self, samples: &[Sample]) -> Result<WaveformEntry, CatalogError> {
        (**self).save(samples)
    }
}

/// Catalog backed by two directories on disk
#[derive(Debug, Clone)]
pub struct FilesystemCatalog {
    bundled_dir: PathBuf,
    export_dir: PathBuf,
}

impl FilesystemCatalog {
    pub fn new(bundled_dir: impl Into<PathBuf>, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            bundled_dir: bundled_dir.into(),
            export_dir: export_dir.into(),
        }
    }

    pub fn bundled_dir(&self) -> &Path {
        &self.bundled_dir
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Save `samples` using `now` for the file name
    pub fn save_at(
        &self,
        samples: &[Sample],
        now: DateTime<Local>,
    ) -> Result<WaveformEntry, CatalogError> {
        if samples.is_empty() {
            return Err(CatalogError::EmptyExport);
        }

        let path = unique_export_path(&self.export_dir, now);
        write_waveform(&path, samples)?;

        Ok(WaveformEntry {
            name: entry_name(&path),
            origin: EntryOrigin::Exported,
            path,
        })
    }
}

impl WaveformCatalog for FilesystemCatalog {
    fn list(&self) -> Result<Vec<WaveformEntry>, CatalogError> {
        let mut entries = list_dir(&self.bundled_dir, EntryOrigin::Bundled)?;
        entries.extend(list_dir(&self.export_dir, EntryOrigin::Exported)?);
        log::info!("list: {} waveforms", entries.len());
        Ok(entries)
    }

    fn load(&self, entry: &WaveformEntry) -> Result<Vec<Sample>, CatalogError> {
        Ok(read_waveform(&entry.path)?)
    }

    fn save(&self, samples: &[Sample]) -> Result<WaveformEntry, CatalogError> {
        self.save_at(samples, Local::now())
    }
}

/// Sorted waveform entries of one directory (missing directory = none)
fn list_dir(dir: &Path, origin: EntryOrigin) -> Result<Vec<WaveformEntry>, CatalogError> {
    if !dir.is_dir() {
        log::debug!("list_dir: {:?} does not exist, skipping", dir);
        return Ok(Vec::new());
    }

    let listing_err = |source| CatalogError::Listing {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for item in std::fs::read_dir(dir).map_err(listing_err)? {
        let path = item.map_err(listing_err)?.path();
        if path.is_file() && is_waveform_file(&path) {
            entries.push(WaveformEntry {
                name: entry_name(&path),
                origin,
                path,
            });
        }
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn is_waveform_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(WAVEFORM_EXTENSION))
}

fn entry_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// `export-YYYYmmdd-HHMMSS.txt`, suffixed `-2`, `-3`, ... if taken
fn unique_export_path(export_dir: &Path, now: DateTime<Local>) -> PathBuf {
    let stem = format!("export-{}", now.format("%Y%m%d-%H%M%S"));
    let mut path = export_dir.join(format!("{}.{}", stem, WAVEFORM_EXTENSION));
    let mut suffix = 2;
    while path.exists() {
        path = export_dir.join(format!("{}-{}.{}", stem, suffix, WAVEFORM_EXTENSION));
        suffix += 1;
    }
    path
}

/// Caches the entry list of a catalog until invalidated
#[derive(Debug)]
pub struct CatalogCache<C> {
    catalog: C,
    entries: Option<Vec<WaveformEntry>>,
}

impl<C: WaveformCatalog> CatalogCache<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            entries: None,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Cached entries, listing the catalog on first use
    pub fn entries(&mut self) -> Result<&[WaveformEntry], CatalogError> {
        let entries = match self.entries.take() {
            Some(entries) => entries,
            None => self.catalog.list()?,
        };
        let entries: &[WaveformEntry] = self.entries.insert(entries);
        Ok(entries)
    }

    /// Force the next `entries()` call to re-list
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// Samples of `entry`, always read from the catalog
    pub fn load(&self, entry: &WaveformEntry) -> Result<Vec<Sample>, CatalogError> {
        self.catalog.load(entry)
    }

    /// Save through the catalog and invalidate the cached list
    pub fn save(&mut self, samples: &[Sample]) -> Result<WaveformEntry, CatalogError> {
        let entry = self.catalog.save(samples)?;
        self.invalidate();
        Ok(entry)
    }
}
