// Main application state and UI rendering logic for Disk Watch

// Import watch panel, OS probing and row widget
use crate::gui::{WatchPanel, disk_usage, volume_row};
// Import runtime settings (config path, refresh interval)
use crate::config::Settings;
// Import the crate-wide Result alias
use crate::error::Result;
// Import egui for UI rendering
use eframe::egui;
// Duration and Instant for the refresh timer
use std::time::{Duration, Instant};
// Debug logging for picker outcomes
use tracing::debug;

/// Main application state for the eframe app.
/// Owns the watch panel and drives its refresh timer.
pub struct AppState {
    /// Watched volumes, selection and persistence
    panel: WatchPanel,

    /// Timestamp of the last refresh cycle
    last_refresh: Instant,
}

impl AppState {
    /// Creates the application state and restores the saved volume list.
    /// Each restored volume is queried once, so the first frame already shows usage.
    ///
    /// # Arguments
    /// * `cc` - eframe creation context containing egui context
    /// * `settings` - config path, refresh interval and warning threshold
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Result<Self> {
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let panel = WatchPanel::load(disk_usage::SystemUsage, settings)?;

        Ok(Self {
            panel,
            last_refresh: Instant::now(),
        })
    }

    /// Opens the folder picker and watches the volume the folder lives on.
    fn add_volume_via_picker(&mut self) {
        let Some(folder) = rfd::FileDialog::new()
            .set_title("Select a folder on the volume to watch")
            .pick_folder()
        else {
            debug!("Folder picker cancelled");
            return;
        };

        let id = disk_usage::picked_volume(&folder);
        debug!("Picked {} on volume {}", folder.display(), id);
        self.panel.add_picked(&id);
    }

    /// Runs a refresh cycle when the interval has elapsed and schedules the next frame.
    fn tick(&mut self, ctx: &egui::Context) {
        let interval = self.panel.settings().refresh_interval;
        let (due, wait) = tick_schedule(self.last_refresh.elapsed(), interval);
        if due {
            self.panel.refresh_all();
            self.last_refresh = Instant::now();
        }
        ctx.request_repaint_after(wait);
    }
}

/// Decides whether a refresh cycle is due and how long to wait for the next frame.
///
/// # Arguments
/// * `elapsed` - time since the last refresh cycle
/// * `interval` - time between two refresh cycles
fn tick_schedule(elapsed: Duration, interval: Duration) -> (bool, Duration) {
    if elapsed >= interval {
        (true, interval)
    } else {
        (false, interval - elapsed)
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Add volume").clicked() {
                    self.add_volume_via_picker();
                }
                if ui.button("Remove volume").clicked() {
                    self.panel.remove_selected();
                }
            });

            ui.add_space(6.0);

            // Watched identifiers, single selection
            let mut clicked = None;
            egui::Frame::none()
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(210)))
                .inner_margin(4.0)
                .show(ui, |ui| {
                    egui::ScrollArea::vertical()
                        .id_salt("volume_list")
                        .max_height(90.0)
                        .auto_shrink([false, true])
                        .show(ui, |ui| {
                            for volume in self.panel.volumes() {
                                let is_selected = self.panel.selected() == Some(volume.id.as_str());
                                if ui.selectable_label(is_selected, &volume.id).clicked() {
                                    clicked = Some(volume.id.clone());
                                }
                            }
                        });
                });
            if let Some(id) = clicked {
                self.panel.select(&id);
            }

            ui.add_space(6.0);
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt("volume_rows")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for volume in self.panel.volumes() {
                        volume_row(ui, volume);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(3000);

    #[test]
    fn test_tick_not_due_before_interval() {
        assert_eq!(
            tick_schedule(Duration::from_millis(1000), INTERVAL),
            (false, Duration::from_millis(2000))
        );
        assert_eq!(tick_schedule(Duration::ZERO, INTERVAL), (false, INTERVAL));
        assert_eq!(
            tick_schedule(Duration::from_millis(2999), INTERVAL),
            (false, Duration::from_millis(1))
        );
    }

    #[test]
    fn test_tick_due_at_interval() {
        assert_eq!(tick_schedule(INTERVAL, INTERVAL), (true, INTERVAL));
    }

    #[test]
    fn test_tick_due_after_late_frame() {
        // A stalled frame still schedules a full interval after the refresh
        assert_eq!(tick_schedule(Duration::from_secs(10), INTERVAL), (true, INTERVAL));
    }
}
