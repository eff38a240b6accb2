use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Calendar date of an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2025-03-14T06:00:00Z`, with offset), naive
/// date-times with or without fractional seconds, and bare dates.
pub fn parse_timestamp_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    parse_date(s)
}

/// `MM/DD/YYYY`, the way log sheets print dates.
pub fn format_log_date(d: NaiveDate) -> String {
    d.format("%m/%d/%Y").to_string()
}
