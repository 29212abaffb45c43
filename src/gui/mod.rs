// GUI module organization and public exports

// Main application state and UI logic
mod app;
// Reusable UI components (volume rows)
mod components;
// OS disk-usage queries and volume root derivation
pub mod disk_usage;
// Watch set and the commands the buttons and timer invoke
mod panel;

// Export AppState for use in main.rs
pub use app::AppState;
// Export all component functions (volume_row, bar_fill)
pub use components::*;
pub use panel::WatchPanel;
