//! Global configuration for wavecut
//!
//! Configuration is stored as YAML inside the library folder.
//! Default location: ~/Music/wavecut/config.yaml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wavecut_core::config::{
    default_config_path as library_file, default_library_path, BUNDLED_DIR_NAME,
    CONFIG_FILE_NAME, EXPORTS_DIR_NAME, SESSION_FILE_NAME,
};
use wavecut_core::{DividerDefaults, FilesystemCatalog};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Where waveforms are read from and exported to
    pub library: LibraryConfig,
    /// Divider positions applied whenever a waveform is loaded
    pub dividers: DividerDefaults,
    /// Window and widget sizes
    pub display: DisplayConfig,
}

/// Library directories
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    /// Read-only waveforms shipped with the app
    pub bundled_dir: PathBuf,
    /// Destination of exported selections
    pub export_dir: PathBuf,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        let root = default_library_path();
        Self {
            bundled_dir: root.join(BUNDLED_DIR_NAME),
            export_dir: root.join(EXPORTS_DIR_NAME),
        }
    }
}

/// Display configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Width of the waveform list panel
    pub list_width: f32,
    /// Height of the editor canvas
    pub editor_height: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_width: 1100.0,
            window_height: 520.0,
            list_width: 280.0,
            editor_height: 300.0,
        }
    }
}

impl DisplayConfig {
    /// Clamp sizes to something the layout can work with
    pub fn validate(&mut self) {
        self.window_width = self.window_width.clamp(400.0, 8192.0);
        self.window_height = self.window_height.clamp(300.0, 8192.0);
        self.list_width = self.list_width.clamp(120.0, self.window_width / 2.0);
        self.editor_height = self.editor_height.clamp(80.0, 4096.0);
    }
}

impl EditorConfig {
    /// Validate every section in place
    pub fn validate(&mut self) {
        self.dividers.validate();
        self.display.validate();
    }

    /// Catalog over the configured library directories
    pub fn catalog(&self) -> FilesystemCatalog {
        FilesystemCatalog::new(&self.library.bundled_dir, &self.library.export_dir)
    }
}

/// Get the default config file path
///
/// Returns: ~/Music/wavecut/config.yaml
pub fn default_config_path() -> PathBuf {
    library_file(CONFIG_FILE_NAME)
}

/// Get the default session file path
///
/// Returns: ~/Music/wavecut/session.yaml
pub fn default_session_path() -> PathBuf {
    library_file(SESSION_FILE_NAME)
}

/// Load and validate configuration
///
/// A missing or invalid file yields the defaults.
pub fn load_config(path: &Path) -> EditorConfig {
    let mut config: EditorConfig = wavecut_core::config::load_config(path);
    config.validate();
    log::info!(
        "load_config: bundled {:?}, exports {:?}, dividers {:.2}-{:.2}",
        config.library.bundled_dir,
        config.library.export_dir,
        config.dividers.left,
        config.dividers.right
    );
    config
}
