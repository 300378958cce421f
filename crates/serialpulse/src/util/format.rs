/// Convert a raw timestamp string into a human-readable axis label.
///
/// Ten-digit hour stamps ("YYYYMMDDHH") become "YYYY/MM/DD HHh". Everything
/// else passes through unchanged, including eight-digit day keys and ISO
/// dates (which are also ten characters, hence the digit check).
pub fn format_axis_label(timestamp: &str) -> String {
    if timestamp.len() == 10 && timestamp.bytes().all(|b| b.is_ascii_digit()) {
        format!(
            "{}/{}/{} {}h",
            &timestamp[..4],
            &timestamp[4..6],
            &timestamp[6..8],
            &timestamp[8..10]
        )
    } else {
        timestamp.to_owned()
    }
}

/// Format a delta value for a y-axis label.
pub fn format_value(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 10_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_stamps_are_reformatted() {
        assert_eq!(format_axis_label("2024010514"), "2024/01/05 14h");
    }

    #[test]
    fn day_keys_pass_through() {
        assert_eq!(format_axis_label("20240105"), "20240105");
    }

    #[test]
    fn iso_dates_pass_through() {
        // Also ten characters, but not all digits.
        assert_eq!(format_axis_label("2024-01-05"), "2024-01-05");
    }

    #[test]
    fn values_are_compacted() {
        assert_eq!(format_value(15.0), "15");
        assert_eq!(format_value(-3.25), "-3.2");
        assert_eq!(format_value(12_500.0), "12.5K");
        assert_eq!(format_value(2_400_000.0), "2.4M");
    }
}
