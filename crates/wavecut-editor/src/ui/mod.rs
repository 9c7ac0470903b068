//! User interface modules for wavecut

pub mod app;
pub mod editor;
pub mod handlers;
pub mod library_browser;
pub mod message;

pub use app::WavecutApp;
pub use message::Message;
