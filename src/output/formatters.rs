//! Reusable formatting utilities for CLI and page output

use chrono::{DateTime, Local, NaiveDateTime};

/// Placeholder for an absent date
pub const NO_DATE: &str = "--";

/// Layout used for every rendered date
const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Naive layouts the service and the add-task form produce
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Format a server date string for display.
///
/// RFC 3339 values are shown in local time; naive values are shown as given.
/// Absent or blank input yields `--`, anything unparseable is returned as-is.
///
/// # Example output
/// `2026/10/19 14:30:00`
pub fn format_date(value: Option<&str>) -> String {
    let raw = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return NO_DATE.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(DISPLAY_FORMAT).to_string();
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Truncate string to max characters with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
