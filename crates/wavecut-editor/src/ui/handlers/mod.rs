//! Message handlers organized by feature
//!
//! Each sub-module provides handler methods on WavecutApp.

pub mod editor;
pub mod export;
pub mod library;
