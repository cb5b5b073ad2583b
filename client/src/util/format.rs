//! Timestamp display helpers.
//!
//! Backend timestamps arrive as ISO-8601 strings with or without an offset;
//! `datetime-local` inputs produce minute precision without seconds. All are
//! shown in the wall-clock time they carry.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a backend or form timestamp.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `Mar 01, 2024 09:05`; unparseable input is shown as-is.
pub fn format_date_time(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(
        || raw.to_owned(),
        |dt| dt.format("%b %d, %Y %H:%M").to_string(),
    )
}

/// `Mar 01, 2024`; unparseable input is shown as-is.
pub fn format_date(raw: &str) -> String {
    parse_timestamp(raw).map_or_else(|| raw.to_owned(), |dt| dt.format("%b %d, %Y").to_string())
}
