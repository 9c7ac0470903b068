//! Standard locations of the wavecut library
//!
//! ```text
//! ~/Music/wavecut/
//! ├── config.yaml
//! ├── session.yaml
//! ├── waveforms/
//! └── exports/
//! ```

use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const SESSION_FILE_NAME: &str = "session.yaml";
pub const BUNDLED_DIR_NAME: &str = "waveforms";
pub const EXPORTS_DIR_NAME: &str = "exports";

/// Root of the wavecut library: `~/Music/wavecut`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_library_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Music")
        .join("wavecut")
}

/// `~/Music/wavecut/{filename}`
pub fn default_config_path(filename: &str) -> PathBuf {
    default_library_path().join(filename)
}
