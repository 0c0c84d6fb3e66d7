/// Binary unit thresholds, largest first: (threshold, shift to the unit below, suffix).
const UNITS: [(u64, u32, &str); 6] = [
    (1 << 60, 50, "EB"),
    (1 << 50, 40, "PB"),
    (1 << 40, 30, "TB"),
    (1 << 30, 20, "GB"),
    (1 << 20, 10, "MB"),
    (1 << 10, 0, "KB"),
];

/// Human-readable byte count, e.g. `"500 B"`, `"1.5 KB"`, `"1 MB"`.
///
/// Values are printed with at most two decimals. Negative counts are
/// formatted by magnitude and the sign is not re-applied.
pub fn format_bytes(bytes: i64) -> String {
    let magnitude = bytes.unsigned_abs();

    for (threshold, shift, suffix) in UNITS {
        if magnitude >= threshold {
            // Shift first so the float conversion stays exact for huge values.
            let readable = (magnitude >> shift) as f64 / 1024.0;
            return format!("{} {suffix}", two_decimals(readable));
        }
    }

    format!("{magnitude} B")
}

fn two_decimals(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes_small_values() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(500), "500 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn test_format_bytes_unit_boundaries() {
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1 << 20), "1 MB");
        assert_eq!(format_bytes(1 << 30), "1 GB");
        assert_eq!(format_bytes(1 << 40), "1 TB");
        assert_eq!(format_bytes(1 << 50), "1 PB");
        assert_eq!(format_bytes(1 << 60), "1 EB");
    }

    #[test]
    fn test_format_bytes_fractions() {
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1_048_576), "1 MB");
        assert_eq!(format_bytes(2_621_440), "2.5 MB");
        assert_eq!(format_bytes(1_288_490_189), "1.2 GB");
        assert_eq!(format_bytes(1100), "1.07 KB");
    }

    #[test]
    fn test_format_bytes_drops_sign() {
        assert_eq!(format_bytes(-500), "500 B");
        assert_eq!(format_bytes(-1536), "1.5 KB");
    }

    #[test]
    fn test_format_bytes_extremes() {
        assert_eq!(format_bytes(i64::MAX), "8 EB");
        assert_eq!(format_bytes(i64::MIN), "8 EB");
    }
}
