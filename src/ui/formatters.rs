const BYTE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte quantity in human-readable form (B, KB, MB, GB, TB, PB)
///
/// The value is divided by 1024 until it drops below 1024; anything past
/// the petabyte range stays in PB. Negative values are left in bytes.
pub fn format_bytes(value: f64) -> String {
    let mut scaled = value;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", scaled, BYTE_UNITS[unit])
}

/// Format a byte rate, e.g. `1.5MB/s`
pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// Format an operations/packets rate rounded to whole units, e.g. `120/s`
pub fn format_count_rate(per_sec: f64) -> String {
    format!("{:.0}/s", per_sec)
}

/// Format an uptime in seconds as `{days}d {hours}h {minutes}m`
pub fn format_uptime(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let days = seconds / 86_400;
    let hours = (seconds % 86_400) / 3_600;
    let minutes = (seconds % 3_600) / 60;
    format!("{}d {}h {}m", days, hours, minutes)
}

/// Format a temperature with one decimal, e.g. `48.5°C`
pub fn format_celsius(value: f64) -> String {
    format!("{:.1}°C", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small_values() {
        assert_eq!(format_bytes(0.0), "0.0B");
        assert_eq!(format_bytes(512.0), "512.0B");
        assert_eq!(format_bytes(1023.0), "1023.0B");
    }

    #[test]
    fn test_format_bytes_picks_smallest_unit() {
        assert_eq!(format_bytes(1024.0), "1.0KB");
        assert_eq!(format_bytes(1536.0), "1.5KB");
        assert_eq!(format_bytes(5.0 * 1024.0 * 1024.0), "5.0MB");
        assert_eq!(format_bytes(16.0 * 1024.0 * 1024.0 * 1024.0), "16.0GB");
        assert_eq!(format_bytes(2.0 * 1024f64.powi(4)), "2.0TB");
    }

    #[test]
    fn test_format_bytes_petabytes_absorb_overflow() {
        assert_eq!(format_bytes(1024f64.powi(5)), "1.0PB");
        assert_eq!(format_bytes(2048.0 * 1024f64.powi(5)), "2048.0PB");
    }

    #[test]
    fn test_format_bytes_negative_stays_in_bytes() {
        assert_eq!(format_bytes(-2048.0), "-2048.0B");
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(90_061), "1d 1h 1m");
        assert_eq!(format_uptime(59), "0d 0h 0m");
        assert_eq!(format_uptime(3 * 86_400 + 59 * 60), "3d 0h 59m");
        assert_eq!(format_uptime(-500), "0d 0h 0m");
    }

    #[test]
    fn test_rates_and_temperatures() {
        assert_eq!(format_rate(1536.0), "1.5KB/s");
        assert_eq!(format_count_rate(119.6), "120/s");
        assert_eq!(format_celsius(48.5), "48.5°C");
    }
}
