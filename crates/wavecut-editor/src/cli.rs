//! Headless export
//!
//! `wavecut --export <input> <left> <right> [--out <dir>]` slices a waveform
//! file between two normalized divider positions and writes the result to the
//! export directory, printing the new file's path. It runs the same domain
//! code the GUI uses.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use thiserror::Error;
use wavecut_core::{DividerSnapshot, EntryOrigin, FilesystemCatalog, Session, WaveformEntry};

use crate::config::EditorConfig;
use crate::domain::EditorDomain;

pub const USAGE: &str = "usage: wavecut [--export <input> <left> <right> [--out <dir>]]";

/// Command line problems
#[derive(Debug, Error, PartialEq)]
pub enum CliError {
    #[error("--export needs <input> <left> <right>")]
    MissingExportArgs,

    #[error("'{0}' is not a divider position (expected a number in 0..=1)")]
    InvalidPosition(String),

    #[error("--out needs a directory")]
    MissingOutDir,

    #[error("unexpected argument '{0}'")]
    Unexpected(String),
}

/// Arguments of a headless export
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    pub input: PathBuf,
    pub left: f32,
    pub right: f32,
    pub out_dir: Option<PathBuf>,
}

/// Parse arguments (without the program name)
///
/// Returns `Ok(None)` when no headless mode was requested.
pub fn parse_export_args(args: &[String]) -> Result<Option<ExportArgs>, CliError> {
    let Some(start) = args.iter().position(|arg| arg == "--export") else {
        return match args.first() {
            Some(arg) => Err(CliError::Unexpected(arg.clone())),
            None => Ok(None),
        };
    };
    if let Some(stray) = args[..start].first() {
        return Err(CliError::Unexpected(stray.clone()));
    }

    let mut rest = args[start + 1..].iter();
    let (Some(input), Some(left), Some(right)) = (rest.next(), rest.next(), rest.next()) else {
        return Err(CliError::MissingExportArgs);
    };

    let mut out_dir = None;
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--out" => {
                let dir = rest.next().ok_or(CliError::MissingOutDir)?;
                out_dir = Some(PathBuf::from(dir));
            }
            other => return Err(CliError::Unexpected(other.to_string())),
        }
    }

    Ok(Some(ExportArgs {
        input: PathBuf::from(input),
        left: parse_position(left)?,
        right: parse_position(right)?,
        out_dir,
    }))
}

fn parse_position(arg: &str) -> Result<f32, CliError> {
    arg.parse::<f32>()
        .ok()
        .filter(|value| (0.0..=1.0).contains(value))
        .ok_or_else(|| CliError::InvalidPosition(arg.to_string()))
}

/// Run a headless export and return the written entry
pub fn run_export(args: &ExportArgs, config: &EditorConfig) -> Result<WaveformEntry> {
    let export_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.library.export_dir.clone());
    let source_dir = args
        .input
        .parent()
        .map(PathBuf::from)
        .unwrap_or_default();
    let catalog = FilesystemCatalog::new(source_dir, export_dir);

    let entry = WaveformEntry {
        name: args
            .input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
        origin: EntryOrigin::Bundled,
        path: args.input.clone(),
    };

    let mut domain = EditorDomain::new(catalog, config.dividers, Session::default());
    domain.select(entry);
    domain
        .load_selected_now()
        .with_context(|| format!("Failed to read {:?}", args.input))?;

    let snapshot = DividerSnapshot {
        left: args.left,
        right: args.right,
    };
    if !domain.restore_dividers(snapshot) {
        bail!(
            "dividers {} and {} must be at least {} apart",
            args.left,
            args.right,
            wavecut_core::MIN_GAP
        );
    }

    match domain.export_now().context("Export failed")? {
        Some(saved) => Ok(saved),
        None => bail!(
            "{:?} has {} samples; export needs more than {}",
            args.input,
            domain.editor().samples().len(),
            wavecut_core::MIN_SAMPLES_FOR_EXPORT
        ),
    }
}
