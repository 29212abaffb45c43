// Watch set state and the commands the UI invokes on it

// Import settings and volume list persistence
use crate::config::{Settings, load_watch_list, save_watch_list};
// Import the crate-wide Result alias
use crate::error::Result;
// Import the OS usage query and its trait
use crate::gui::disk_usage::{SystemUsage, UsageSource};
// Import watched volume models
use crate::models::{BarColor, VolumeStatus, WatchedVolume};
// Structured logging for watch set changes
use tracing::{debug, info, warn};

/// Ordered set of watched volumes plus the list selection.
///
/// Identifiers are compared as literal strings, so `/mnt/a` and `/mnt/a/`
/// are two different entries.
pub struct WatchPanel<S: UsageSource = SystemUsage> {
    volumes: Vec<WatchedVolume>,
    selected: Option<String>,
    source: S,
    settings: Settings,
}

impl<S: UsageSource> WatchPanel<S> {
    pub fn new(source: S, settings: Settings) -> Self {
        Self {
            volumes: Vec::new(),
            selected: None,
            source,
            settings,
        }
    }

    /// Builds the panel from the saved volume list. Startup only.
    pub fn load(source: S, settings: Settings) -> Result<Self> {
        let mut panel = Self::new(source, settings);
        panel.load_config()?;
        Ok(panel)
    }

    pub fn volumes(&self) -> &[WatchedVolume] {
        &self.volumes
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.volumes.iter().any(|v| v.id == id)
    }

    /// Selects `id` in the list; unknown identifiers clear the selection.
    pub fn select(&mut self, id: &str) {
        self.selected = self.contains(id).then(|| id.to_string());
    }

    /// Appends `id` and refreshes it once. Returns false if it was already watched.
    pub fn add_volume(&mut self, id: &str) -> bool {
        if self.contains(id) {
            debug!("{} already watched", id);
            return false;
        }

        info!("Watching {}", id);
        self.volumes.push(WatchedVolume::new(id));
        self.refresh_one(id);
        true
    }

    /// Adds the volume derived from a picked directory and persists the list.
    pub fn add_picked(&mut self, id: &str) {
        self.add_volume(id);
        self.persist();
    }

    /// Drops the selected volume and persists the list. No selection, no change.
    pub fn remove_selected(&mut self) -> Option<String> {
        let id = self.selected.take()?;
        let pos = self.volumes.iter().position(|v| v.id == id)?;

        let removed = self.volumes.remove(pos);
        info!("Stopped watching {}", removed.id);
        self.persist();
        Some(removed.id)
    }

    /// One refresh cycle over every watched volume.
    pub fn refresh_all(&mut self) {
        let ids: Vec<String> = self.volumes.iter().map(|v| v.id.clone()).collect();
        for id in &ids {
            self.refresh_one(id);
        }
    }

    /// Re-queries `id` and overwrites its row. Failures only mark that row.
    ///
    /// # Arguments
    /// * `id` - identifier of a watched volume; unknown ones are ignored
    pub fn refresh_one(&mut self, id: &str) {
        let Some(volume) = self.volumes.iter_mut().find(|v| v.id == id) else {
            return;
        };

        let status = match self.source.query(id) {
            Ok(usage) => {
                debug!("{}: {:.1}% used", id, usage.percent_used);
                VolumeStatus::Ready {
                    usage,
                    color: BarColor::for_usage(usage.percent_used, self.settings.warn_percent),
                }
            }
            Err(e) => {
                debug!("{} unreadable: {}", id, e);
                VolumeStatus::Unreadable
            }
        };

        volume.status = status;
    }

    /// Writes the watch set, in list order, over the config file.
    pub fn save_config(&self) -> Result<()> {
        let ids: Vec<&str> = self.volumes.iter().map(|v| v.id.as_str()).collect();
        save_watch_list(&self.settings.config_path, &ids)
    }

    /// Adds every identifier from the config file, in file order.
    pub fn load_config(&mut self) -> Result<()> {
        for id in load_watch_list(&self.settings.config_path)? {
            self.add_volume(&id);
        }
        Ok(())
    }

    // Save failures are not fatal to the UI; the next change retries.
    fn persist(&self) {
        if let Err(e) = self.save_config() {
            warn!("Failed to save {}: {}", self.settings.config_path.display(), e);
        }
    }
}
