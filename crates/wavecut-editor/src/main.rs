//! Wavecut - waveform range editor
//!
//! ## Command line flags
//!
//! - `--export <input> <left> <right> [--out <dir>]`: slice a waveform file
//!   without the GUI and print the path of the exported file

use wavecut_editor::cli::{self, USAGE};
use wavecut_editor::config::{self, default_session_path};
use wavecut_editor::ui::WavecutApp;

fn title(app: &WavecutApp) -> String {
    match app.selected_name() {
        Some(name) => format!("wavecut - {}", name),
        None => String::from("wavecut"),
    }
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let export = match cli::parse_export_args(&args) {
        Ok(export) => export,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    let config = config::load_config(&config::default_config_path());

    if let Some(export) = export {
        log::info!("Headless export of {:?}", export.input);
        match cli::run_export(&export, &config) {
            Ok(saved) => {
                println!("{}", saved.path.display());
                return Ok(());
            }
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    log::info!("wavecut starting up");
    let window_size = iced::Size::new(config.display.window_width, config.display.window_height);
    let session_path = default_session_path();

    iced::application(
        move || WavecutApp::new(config.clone(), session_path.clone()),
        WavecutApp::update,
        WavecutApp::view,
    )
    .title(title)
    .window_size(window_size)
    .theme(WavecutApp::theme)
    .run()
}
