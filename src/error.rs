//! Error types for Disk Watch.
//!
//! Only startup and config I/O errors ever reach the user as a failure;
//! per-volume query errors are folded into the row state by the panel.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiskWatchError {
    /// Reading or writing the volume list failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// statvfs rejected the volume path
    #[cfg(unix)]
    #[error("cannot read usage of {volume}: {source}")]
    Usage {
        volume: String,
        #[source]
        source: nix::Error,
    },

    /// No mounted disk contains the volume path
    #[cfg(not(unix))]
    #[error("no mounted disk contains {0}")]
    VolumeNotFound(String),

    /// The native window could not be created
    #[error("GUI error: {0}")]
    Gui(String),
}

/// Result type alias for Disk Watch operations
pub type Result<T> = std::result::Result<T, DiskWatchError>;
