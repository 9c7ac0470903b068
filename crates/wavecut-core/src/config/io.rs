//! YAML file I/O for any serde type
//!
//! A missing or unreadable file is never fatal at load time: the caller gets
//! `T::default()` and a warning in the log. Saving reports errors with context.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load `T` from a YAML file, falling back to `T::default()`
///
/// ```ignore
/// let session: Session = load_config(&path);
/// ```
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("load_config: {:?} not found, using defaults", path);
        return T::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::warn!("load_config: Failed to read {:?}: {}, using defaults", path, e);
            return T::default();
        }
    };

    match serde_yaml::from_str::<T>(&contents) {
        Ok(value) => {
            log::info!("load_config: Loaded {:?}", path);
            value
        }
        Err(e) => {
            log::warn!("load_config: Failed to parse {:?}: {}, using defaults", path, e);
            T::default()
        }
    }
}

/// Write `value` as YAML, creating parent directories
pub fn save_config<T>(value: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(value).context("Failed to serialize to YAML")?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write {:?}", path))?;

    log::debug!("save_config: Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Sizes {
        width: u32,
        label: String,
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let sizes: Sizes = load_config(&dir.path().join("absent.yaml"));
        assert_eq!(sizes, Sizes::default());
    }

    #[test]
    fn test_garbage_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "width: [not, a, number").unwrap();

        let sizes: Sizes = load_config(&path);
        assert_eq!(sizes, Sizes::default());
    }

    #[test]
    fn test_save_creates_dirs_and_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("sizes.yaml");
        let sizes = Sizes {
            width: 640,
            label: "wide".to_string(),
        };

        save_config(&sizes, &path).unwrap();
        assert_eq!(load_config::<Sizes>(&path), sizes);
    }
}
