/// Utilities for date formatting
///
/// Server timestamps arrive as ISO strings; anything unparseable is shown as-is.
use chrono::{DateTime, NaiveDate};

/// Format ISO date or datetime string to "15 Mar 2024"
pub fn format_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d %b %Y").to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Optional variant used by tables: missing dates render as "-".
pub fn format_date_opt(date_str: Option<&str>) -> String {
    match date_str {
        Some(s) if !s.trim().is_empty() => format_date(s),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
        assert_eq!(format_date("2024-12-31T23:59:59"), "31 Dec 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("")), "-");
    }
}
