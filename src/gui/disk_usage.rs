// OS disk-usage queries and volume root derivation

// Import the crate-wide Result alias
use crate::error::Result;
// Import the usage snapshot model
use crate::models::VolumeUsage;
// Path types for identifiers and picked folders
use std::path::{Path, PathBuf};
// sysinfo for the mounted disk list
use sysinfo::Disks;

/// Something that can report space usage for a volume identifier.
pub trait UsageSource {
    fn query(&self, volume: &str) -> Result<VolumeUsage>;
}

/// Asks the operating system directly on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemUsage;

#[cfg(unix)]
impl UsageSource for SystemUsage {
    fn query(&self, volume: &str) -> Result<VolumeUsage> {
        use nix::sys::statvfs::statvfs;

        let st = statvfs(volume).map_err(|source| crate::error::DiskWatchError::Usage {
            volume: volume.to_string(),
            source,
        })?;

        let frsize = st.fragment_size() as u64;
        let total = st.blocks() as u64 * frsize;
        let free = st.blocks_available() as u64 * frsize;
        let used = (st.blocks() as u64).saturating_sub(st.blocks_free() as u64) * frsize;

        Ok(VolumeUsage {
            total_bytes: total,
            free_bytes: free,
            percent_used: percent_of(used, used + free),
        })
    }
}

#[cfg(not(unix))]
impl UsageSource for SystemUsage {
    fn query(&self, volume: &str) -> Result<VolumeUsage> {
        let disks = Disks::new_with_refreshed_list();
        let path = Path::new(volume);

        let disk = disks
            .iter()
            .filter(|d| path.starts_with(d.mount_point()))
            .max_by_key(|d| d.mount_point().as_os_str().len())
            .ok_or_else(|| crate::error::DiskWatchError::VolumeNotFound(volume.to_string()))?;

        let total = disk.total_space();
        let free = disk.available_space();

        Ok(VolumeUsage {
            total_bytes: total,
            free_bytes: free,
            percent_used: percent_of(total.saturating_sub(free), total),
        })
    }
}

/// `part / whole` as a percentage rounded to one decimal, 0 for an empty whole.
fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Mount points currently known to the OS.
pub fn mount_points() -> Vec<PathBuf> {
    let disks = Disks::new_with_refreshed_list();
    disks.iter().map(|d| d.mount_point().to_path_buf()).collect()
}

/// Derives the volume identifier for a directory picked by the user.
///
/// On unix the filesystem boundary is found by device id, which also covers
/// mounts sysinfo does not list (tmpfs, devtmpfs). Elsewhere, or if the
/// folder cannot be stat'ed, the mounted disk list decides.
///
/// # Arguments
/// * `selected` - folder returned by the picker
pub fn picked_volume(selected: &Path) -> String {
    match native_root(selected) {
        Some(root) => root.display().to_string(),
        None => volume_root(selected, &mount_points()),
    }
}

#[cfg(unix)]
fn native_root(selected: &Path) -> Option<PathBuf> {
    device_root(selected)
}

#[cfg(not(unix))]
fn native_root(_selected: &Path) -> Option<PathBuf> {
    None
}

/// Topmost ancestor of `path` that lives on the same device as `path` itself.
#[cfg(unix)]
pub fn device_root(path: &Path) -> Option<PathBuf> {
    use nix::sys::stat::stat;

    let dev = stat(path).ok()?.st_dev;
    let mut root = path;
    for ancestor in path.ancestors().skip(1) {
        match stat(ancestor) {
            Ok(st) if st.st_dev == dev => root = ancestor,
            _ => break,
        }
    }
    Some(root.to_path_buf())
}

/// Mount-point fallback for [`picked_volume`].
///
/// The longest mount point containing `selected` wins; without one the
/// path's own root (`/`, or `C:\` on Windows) is used.
///
/// # Arguments
/// * `selected` - folder returned by the picker
/// * `mounts` - mount points to match against
pub fn volume_root(selected: &Path, mounts: &[PathBuf]) -> String {
    let root = mounts
        .iter()
        .filter(|m| selected.starts_with(m))
        .max_by_key(|m| m.as_os_str().len())
        .map(PathBuf::as_path)
        .or_else(|| selected.ancestors().last())
        .unwrap_or(selected);

    root.display().to_string()
}
