//! Runtime settings and persistence of the watched-volume list.
//!
//! The list lives in a plain text file, one identifier per line, rewritten
//! in full on every change.

// Import the crate-wide Result alias
use crate::error::Result;
// ErrorKind to tell a missing file from a real read error
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;
// Import info-level logging for loads and saves
use tracing::info;

/// File name of the volume list, relative to the working directory
pub const CONFIG_FILE_NAME: &str = "drives.txt";

/// Runtime constants for the panel.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Where the watched-volume list is stored
    pub config_path: PathBuf,
    /// Time between two refresh cycles
    pub refresh_interval: Duration,
    /// Percent used at which a bar turns red
    pub warn_percent: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(CONFIG_FILE_NAME),
            refresh_interval: Duration::from_millis(3000),
            warn_percent: 90.0,
        }
    }
}

/// Reads the volume list in file order.
///
/// A missing file is an empty list. Lines are trimmed and blank ones skipped;
/// anything else is accepted as an identifier without validation.
pub fn load_watch_list(path: &Path) -> Result<Vec<String>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("{} not found, starting with no volumes", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let ids: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    info!("Loaded {} volume(s) from {}", ids.len(), path.display());
    Ok(ids)
}

/// Overwrites the volume list with `ids`, one per line.
pub fn save_watch_list<S: AsRef<str>>(path: &Path, ids: &[S]) -> Result<()> {
    let body = ids.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join("\n");
    std::fs::write(path, body)?;
    info!("Saved {} volume(s) to {}", ids.len(), path.display());
    Ok(())
}
