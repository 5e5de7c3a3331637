//! Formatting utilities for CLI output.

/// Format a byte total as a compact human-readable string.
///
/// The value is divided by 1024 until it drops below one unit, then printed
/// with two decimals and a single-letter suffix. Totals of a terabyte and
/// beyond all use the `T` suffix.
///
/// # Examples
///
/// ```
/// use census_cli_common::format_bytes;
///
/// assert_eq!(format_bytes(500.0), "500.00B");
/// assert_eq!(format_bytes(2048.0), "2.00K");
/// assert_eq!(format_bytes(1536.0), "1.50K");
/// assert_eq!(format_bytes(1_048_576.0), "1.00M");
/// assert_eq!(format_bytes(1_099_511_627_776.0), "1.00T");
/// ```
pub fn format_bytes(bytes: f64) -> String {
    const UNIT: f64 = 1024.0;

    if bytes < UNIT {
        return format!("{bytes:.2}B");
    }
    let kb = bytes / UNIT;
    if kb < UNIT {
        return format!("{kb:.2}K");
    }
    let mb = kb / UNIT;
    if mb < UNIT {
        return format!("{mb:.2}M");
    }
    let gb = mb / UNIT;
    if gb < UNIT {
        return format!("{gb:.2}G");
    }
    format!("{:.2}T", gb / UNIT)
}

/// Format a large number with commas for readability.
///
/// # Examples
///
/// ```
/// use census_cli_common::format_number;
///
/// assert_eq!(format_number(0), "0");
/// assert_eq!(format_number(123), "123");
/// assert_eq!(format_number(1234), "1,234");
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(1234567890), "1,234,567,890");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;

    for c in s.chars().rev() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
        count += 1;
    }

    result.chars().rev().collect()
}
