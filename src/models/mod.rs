// Data models for watched volumes and their live usage

/// Space usage reported by the OS for one volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeUsage {
    /// Total capacity in bytes
    pub total_bytes: u64,
    /// Bytes available to the current user
    pub free_bytes: u64,
    /// Percentage of space used (0-100, one decimal)
    pub percent_used: f64,
}

/// Fill color of a volume's progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarColor {
    /// Plenty of room left
    Blue,
    /// At or above the warning threshold
    Red,
}

impl BarColor {
    /// Picks red when `percent_used` has reached `warn_percent`, blue otherwise.
    pub fn for_usage(percent_used: f64, warn_percent: f64) -> Self {
        if percent_used >= warn_percent {
            BarColor::Red
        } else {
            BarColor::Blue
        }
    }
}

/// Last known state of a watched volume.
#[derive(Clone, Debug, PartialEq)]
pub enum VolumeStatus {
    /// Row created, no query has completed yet
    Pending,
    /// Last query succeeded
    Ready { usage: VolumeUsage, color: BarColor },
    /// Last query failed (path gone, ejected, permission denied)
    Unreadable,
}

/// A volume in the watch set together with what its row currently shows.
#[derive(Clone, Debug)]
pub struct WatchedVolume {
    /// Root path string as entered or derived from the picker
    pub id: String,
    pub status: VolumeStatus,
}

impl WatchedVolume {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: VolumeStatus::Pending,
        }
    }

    /// Progress bar value, percent used rounded down.
    pub fn bar_value(&self) -> u8 {
        match &self.status {
            VolumeStatus::Ready { usage, .. } => usage.percent_used.clamp(0.0, 100.0).floor() as u8,
            VolumeStatus::Pending | VolumeStatus::Unreadable => 0,
        }
    }

    /// Bar fill color; `None` while there is nothing to fill.
    pub fn bar_color(&self) -> Option<BarColor> {
        match &self.status {
            VolumeStatus::Ready { color, .. } => Some(*color),
            VolumeStatus::Pending | VolumeStatus::Unreadable => None,
        }
    }

    /// Text shown above the bar.
    pub fn label(&self) -> String {
        match &self.status {
            VolumeStatus::Ready { usage, .. } => format!(
                "{} {} left / {} total ({:.1}% used)",
                self.id,
                crate::units::format_size(usage.free_bytes),
                crate::units::format_size(usage.total_bytes),
                usage.percent_used
            ),
            VolumeStatus::Pending => self.id.clone(),
            VolumeStatus::Unreadable => format!("{} unreadable", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(free: u64, total: u64, percent: f64) -> WatchedVolume {
        WatchedVolume {
            id: "/data".to_string(),
            status: VolumeStatus::Ready {
                usage: VolumeUsage {
                    total_bytes: total,
                    free_bytes: free,
                    percent_used: percent,
                },
                color: BarColor::for_usage(percent, 90.0),
            },
        }
    }

    #[test]
    fn test_color_threshold_is_inclusive() {
        assert_eq!(BarColor::for_usage(90.0, 90.0), BarColor::Red);
        assert_eq!(BarColor::for_usage(89.9, 90.0), BarColor::Blue);
        assert_eq!(BarColor::for_usage(100.0, 90.0), BarColor::Red);
        assert_eq!(BarColor::for_usage(0.0, 90.0), BarColor::Blue);
    }

    #[test]
    fn test_ready_label_and_bar() {
        let gib = 1024u64.pow(3);
        let v = ready(25 * gib, 100 * gib, 75.46);
        assert_eq!(v.label(), "/data 25.0 GB left / 100.0 GB total (75.5% used)");
        assert_eq!(v.bar_value(), 75);
        assert_eq!(v.bar_color(), Some(BarColor::Blue));
    }

    #[test]
    fn test_bar_value_rounds_down() {
        let v = ready(1, 100, 99.9);
        assert_eq!(v.bar_value(), 99);
        assert_eq!(v.bar_color(), Some(BarColor::Red));
    }

    #[test]
    fn test_unreadable_state() {
        let mut v = WatchedVolume::new("B:\\");
        v.status = VolumeStatus::Unreadable;
        assert_eq!(v.label(), "B:\\ unreadable");
        assert_eq!(v.bar_value(), 0);
        assert_eq!(v.bar_color(), None);
    }

    #[test]
    fn test_pending_shows_identifier_only() {
        let v = WatchedVolume::new("/mnt/usb");
        assert_eq!(v.label(), "/mnt/usb");
        assert_eq!(v.bar_value(), 0);
    }
}
