//! Configuration files for wavecut
//!
//! YAML loading/saving shared by the app config and the session file, plus
//! the standard library layout under `~/Music/wavecut`.
//!
//! ```ignore
//! use wavecut_core::config::{load_config, save_config, default_config_path};
//!
//! let config: EditorConfig = load_config(&default_config_path("config.yaml"));
//! save_config(&config, &default_config_path("config.yaml"))?;
//! ```

mod io;
mod paths;

pub use io::{load_config, save_config};
pub use paths::{
    default_config_path, default_library_path, BUNDLED_DIR_NAME, CONFIG_FILE_NAME,
    EXPORTS_DIR_NAME, SESSION_FILE_NAME,
};
