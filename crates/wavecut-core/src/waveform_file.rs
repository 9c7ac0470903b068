//! Waveform text files
//!
//! One sample per line, written as `"<bottom> <top>"` separated by
//! whitespace. Blank lines are ignored.
//!
//! ```text
//! -0.42 0.51
//! -0.38 0.47
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::Sample;

/// Errors reading or writing waveform files
#[derive(Debug, Error)]
pub enum WaveformFileError {
    /// Malformed sample line (1-based line number)
    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// File could not be read or written
    #[error("Waveform file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse waveform text into samples
pub fn parse_samples(text: &str) -> Result<Vec<Sample>, WaveformFileError> {
    let mut samples = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(WaveformFileError::Parse {
                line: index + 1,
                reason: format!("expected 2 values, found {}", fields.len()),
            });
        }

        let bottom = parse_value(fields[0], index + 1)?;
        let top = parse_value(fields[1], index + 1)?;
        samples.push(Sample::new(bottom, top));
    }

    Ok(samples)
}

fn parse_value(field: &str, line: usize) -> Result<f64, WaveformFileError> {
    field.parse::<f64>().map_err(|e| WaveformFileError::Parse {
        line,
        reason: format!("invalid number '{}': {}", field, e),
    })
}

/// Format samples as waveform text (newline-terminated)
pub fn format_samples(samples: &[Sample]) -> String {
    let mut out = String::with_capacity(samples.len() * 16);
    for sample in samples {
        out.push_str(&format!("{} {}\n", sample.bottom, sample.top));
    }
    out
}

/// Read and parse a waveform file
pub fn read_waveform(path: &Path) -> Result<Vec<Sample>, WaveformFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| WaveformFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let samples = parse_samples(&text)?;
    log::debug!("read_waveform: {} samples from {:?}", samples.len(), path);
    Ok(samples)
}

/// Write samples to a waveform file, creating parent directories as needed
pub fn write_waveform(path: &Path, samples: &[Sample]) -> Result<(), WaveformFileError> {
    let io_err = |source| WaveformFileError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, format_samples(samples)).map_err(io_err)?;

    log::info!("write_waveform: {} samples to {:?}", samples.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "-0.5 0.5\n\n  \n-0.25\t0.75\n";
        let samples = parse_samples(text).unwrap();
        assert_eq!(samples, vec![Sample::new(-0.5, 0.5), Sample::new(-0.25, 0.75)]);
    }

    #[test]
    fn test_parse_reports_line_numbers() {
        let err = parse_samples("-0.5 0.5\n0.1\n").unwrap_err();
        match err {
            WaveformFileError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }

        let err = parse_samples("\n\n-0.5 abc\n").unwrap_err();
        match err {
            WaveformFileError::Parse { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("abc"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_formatted_text_parses_back() {
        let samples = vec![Sample::new(-0.125, 0.5), Sample::new(-1.0, 1.0)];
        let text = format_samples(&samples);
        assert_eq!(text, "-0.125 0.5\n-1 1\n");
        assert_eq!(parse_samples(&text).unwrap(), samples);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        let samples = vec![Sample::new(-0.1, 0.2); 4];

        write_waveform(&path, &samples).unwrap();
        assert_eq!(read_waveform(&path).unwrap(), samples);
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_waveform(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, WaveformFileError::Io { .. }));
    }
}
