// Application entry point for the Disk Watch GUI

// Volume list persistence and runtime settings
mod config;
// Error types shared across modules
mod error;
// Import the GUI module containing the main application state
mod gui;
// tracing subscriber setup
mod logging;
// Data models for watched volumes
mod models;
// Byte count formatting
mod units;

/// Entry point for the application.
/// Installs logging, then launches the eframe window with the watch panel.
fn main() -> error::Result<()> {
    logging::init_logging();

    let settings = config::Settings::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 320.0])
            .with_resizable(true),
        ..Default::default()
    };

    // Config read errors surface here through the app creator and abort startup
    eframe::run_native(
        "Disk Watch",
        options,
        Box::new(move |cc| Ok(Box::new(gui::AppState::new(cc, settings)?))),
    )
    .map_err(|e| error::DiskWatchError::Gui(e.to_string()))
}
