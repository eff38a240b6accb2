//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

/// Remove ANSI color sequences.
pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Terminal width of `s`, ignoring color codes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    format!("{s}{}", " ".repeat(width.saturating_sub(w)))
}

/// Decimal hours as `H:MM`, rounded to the minute (24.0 → `24:00`).
pub fn format_hours_hmm(hours: f64) -> String {
    let total_minutes = minutes_of(hours);
    format!("{}:{:02}", total_minutes / 60, total_minutes % 60)
}

/// Compact duration: `2h 30m`, `3h`, `45m`.
pub fn format_duration(hours: f64) -> String {
    let hours = if hours.is_finite() { hours.max(0.0) } else { 0.0 };

    if hours >= 1.0 {
        let whole = hours.floor();
        let minutes = ((hours - whole) * 60.0).round() as u64;
        if minutes > 0 {
            format!("{}h {}m", whole as u64, minutes)
        } else {
            format!("{}h", whole as u64)
        }
    } else {
        format!("{}m", (hours * 60.0).round() as u64)
    }
}

/// Hour-of-day as a 12-hour clock: `6:30 AM`, `12:00 PM`, `12:00 AM`.
pub fn format_clock(hour_of_day: f64) -> String {
    let total_minutes = minutes_of(hour_of_day) % (24 * 60);
    let h = total_minutes / 60;
    let m = total_minutes % 60;

    let ampm = if h >= 12 { "PM" } else { "AM" };
    let display = match h % 12 {
        0 => 12,
        other => other,
    };

    format!("{display}:{m:02} {ampm}")
}

/// Cut `s` to at most `max` characters, ending with `...` when shortened.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let keep = max.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

fn minutes_of(hours: f64) -> u64 {
    if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as u64
    } else {
        0
    }
}
