// Human-readable byte counts using binary (1024-based) units

const MIB: f64 = 1024.0 * 1024.0;
const GIB: f64 = MIB * 1024.0;
const TIB: f64 = GIB * 1024.0;

/// Formats a byte count as MB below 1 GiB, GB below 1 TiB, TB otherwise.
pub fn format_size(bytes: u64) -> String {
    let size = bytes as f64;
    if size < GIB {
        format!("{:.1} MB", size / MIB)
    } else if size < TIB {
        format!("{:.1} GB", size / GIB)
    } else {
        format!("{:.2} TB", size / TIB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabytes() {
        assert_eq!(format_size(500 * 1024 * 1024), "500.0 MB");
        assert_eq!(format_size(0), "0.0 MB");
    }

    #[test]
    fn test_gigabyte_boundary() {
        assert_eq!(format_size(1024u64.pow(3)), "1.0 GB");
        assert_eq!(format_size(1024u64.pow(3) - 1), "1024.0 MB");
    }

    #[test]
    fn test_terabyte_boundary() {
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
        assert_eq!(format_size(1024u64.pow(4) * 5 / 2), "2.50 TB");
    }
}
