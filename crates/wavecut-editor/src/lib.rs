//! Wavecut - interactive waveform range editor
//!
//! Browse a library of waveform envelopes, drag two dividers to pick a range,
//! and export the samples in between as a new waveform file.
//!
//! 1. **GUI**: `WavecutApp` (iced) with a library list and an editor canvas.
//! 2. **Headless**: `wavecut --export` slices a file without opening a window.

pub mod cli;
pub mod config;
pub mod domain;
pub mod ui;
