//! Formatting and display logic
//!
//! Pure functions for formatting repository data for display.

use chrono::{Local, TimeZone};

/// Format a server timestamp (milliseconds since the epoch, sent as a
/// string) as local `YYYY-MM-DD HH:MM`. Unparseable input yields `None`.
///
/// # Examples
/// ```
/// use repobrowse::logic::formatting::format_timestamp;
///
/// assert!(format_timestamp("1700000000000").is_some());
/// assert_eq!(format_timestamp("yesterday"), None);
/// ```
pub fn format_timestamp(millis: &str) -> Option<String> {
    let millis: i64 = millis.trim().parse().ok()?;
    let time = Local.timestamp_millis_opt(millis).single()?;
    Some(time.format("%Y-%m-%d %H:%M").to_string())
}

/// Split a file name into stem and extension at the last dot.
/// Names without a dot have an empty extension.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => (&name[..idx], &name[idx + 1..]),
        _ => (name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp_rejects_garbage() {
        assert_eq!(format_timestamp(""), None);
        assert_eq!(format_timestamp("12abc"), None);
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(" 1700000000000 ").unwrap();
        assert_eq!(formatted.len(), "2023-11-14 22:13".len());
        assert!(formatted.starts_with("2023-11-1"));
    }

    #[test]
    fn test_split_extension() {
        assert_eq!(split_extension("sales.prpt"), ("sales", "prpt"));
        assert_eq!(split_extension("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_extension("README"), ("README", ""));
        assert_eq!(split_extension(".hidden"), (".hidden", ""));
    }
}
