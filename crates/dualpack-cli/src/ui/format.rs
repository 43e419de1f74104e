//! Formatting utilities for sizes and durations.

use std::time::Duration;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Format file size in human-readable format.
///
/// Bytes below 1024 are printed as an integer; larger sizes use two
/// decimals in `kB` or `mB`.
///
/// # Examples
///
/// ```
/// use dualpack_cli::ui::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1024), "1.00 kB");
/// assert_eq!(format_size(1_048_576), "1.00 mB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} B", bytes)
    } else if bytes < MIB {
        format!("{:.2} kB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} mB", bytes as f64 / MIB as f64)
    }
}

/// Format duration in human-readable format.
///
/// - under one second: whole milliseconds (`"250ms"`)
/// - under one minute: seconds with two decimals (`"1.50s"`)
/// - otherwise: whole minutes plus rounded remaining seconds (`"2m 5s"`);
///   the seconds part is dropped when it rounds to zero (`"2m"`)
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dualpack_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
/// assert_eq!(format_duration(Duration::from_secs(60)), "1m");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        return format!("{}ms", total_ms);
    }

    let secs = total_ms as f64 / 1000.0;
    if secs < 60.0 {
        return format!("{:.2}s", secs);
    }

    let mins = (secs / 60.0).trunc();
    // Rounded once: the zero check and the printed value must agree
    let rem = (secs % 60.0).round();
    if rem < 1.0 {
        format!("{}m", mins)
    } else {
        format!("{}m {}s", mins, rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(1023), "1023 B");
    }

    #[test]
    fn test_format_size_kilobytes() {
        assert_eq!(format_size(1024), "1.00 kB");
        assert_eq!(format_size(1536), "1.50 kB");
        assert_eq!(format_size(10_240), "10.00 kB");
        assert_eq!(format_size(1_048_575), "1024.00 kB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1_048_576), "1.00 mB");
        assert_eq!(format_size(1_572_864), "1.50 mB");
        assert_eq!(format_size(1_073_741_824), "1024.00 mB");
    }

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
        assert_eq!(format_duration(Duration::from_micros(999_999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
        assert_eq!(format_duration(Duration::from_millis(59_994)), "59.99s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(60)), "1m");
        assert_eq!(format_duration(Duration::from_millis(60_400)), "1m");
        assert_eq!(format_duration(Duration::from_millis(60_600)), "1m 1s");
        assert_eq!(format_duration(Duration::from_secs(65)), "1m 5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "61m 1s");
    }

    #[test]
    fn test_format_duration_half_second_remainder_rounds_up() {
        assert_eq!(format_duration(Duration::from_millis(60_499)), "1m");
        assert_eq!(format_duration(Duration::from_millis(60_500)), "1m 1s");
        assert_eq!(format_duration(Duration::from_millis(62_500)), "1m 3s");
        assert_eq!(format_duration(Duration::from_millis(64_500)), "1m 5s");
        assert_eq!(format_duration(Duration::from_millis(120_500)), "2m 1s");
    }
}
