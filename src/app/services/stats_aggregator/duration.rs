//! Elapsed-time derivation and compact duration formatting

use chrono::NaiveDateTime;

use crate::app::models::Record;
use crate::constants::format::DATETIME_FORMAT;

/// Parse a combined `date time` string into a calendar instant
///
/// Returns `None` for empty text or anything that is not a valid timestamp
/// in the record format (including impossible calendar dates).
pub fn parse_instant(text: &str) -> Option<NaiveDateTime> {
    if text.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(text, DATETIME_FORMAT).ok()
}

/// Compute the elapsed text between the first and last record of a sequence
///
/// Empty when either record has no date, when an instant fails to parse, or
/// when the interval is negative (a data inconsistency reported as "no
/// duration" rather than a negative value).
pub fn elapsed_between(first: &Record, last: &Record) -> String {
    if !first.has_date() || !last.has_date() {
        return String::new();
    }

    let (Some(start), Some(end)) = (
        parse_instant(&first.instant_text()),
        parse_instant(&last.instant_text()),
    ) else {
        return String::new();
    };

    let seconds = end.signed_duration_since(start).num_seconds();
    if seconds < 0 {
        return String::new();
    }

    format_elapsed(seconds)
}

/// Format a non-negative second count as a compact duration string
///
/// Hours appear only when at least one full hour elapsed, minutes appear
/// when hours or minutes are nonzero, seconds always appear: `"1h 5m 30s"`,
/// `"2m 0s"`, `"45s"`.
pub fn format_elapsed(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if hours > 0 || minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", secs));

    parts.join(" ")
}
