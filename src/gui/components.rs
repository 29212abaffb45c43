// Reusable UI components for watched volume rows

// Import watched volume models
use crate::models::{BarColor, WatchedVolume};
// Import egui for UI rendering
use eframe::egui;

/// Fill for a bar at or above the warning threshold
const RED: egui::Color32 = egui::Color32::from_rgb(220, 40, 40);
/// Fill for a bar with room left
const BLUE: egui::Color32 = egui::Color32::from_rgb(40, 90, 220);

pub fn bar_fill(color: BarColor) -> egui::Color32 {
    match color {
        BarColor::Red => RED,
        BarColor::Blue => BLUE,
    }
}

/// Label plus a 20 px progress bar for one watched volume.
pub fn volume_row(ui: &mut egui::Ui, volume: &WatchedVolume) {
    ui.label(egui::RichText::new(volume.label()).size(12.0));

    let mut bar = egui::ProgressBar::new(volume.bar_value() as f32 / 100.0)
        .desired_height(20.0);
    if let Some(color) = volume.bar_color() {
        bar = bar.fill(bar_fill(color));
    }
    ui.add(bar);
    ui.add_space(6.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_fill_colors() {
        assert_eq!(bar_fill(BarColor::Red), RED);
        assert_eq!(bar_fill(BarColor::Blue), BLUE);
        assert_ne!(RED, BLUE);
    }
}
