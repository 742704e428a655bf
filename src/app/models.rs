//! Data models for trail decoding
//!
//! This module contains the core data structures for representing decrypted
//! trail records and the summary statistics derived from them.

use crate::constants::format;
use serde::{Deserialize, Serialize};

// =============================================================================
// Record Structure
// =============================================================================

/// One logged event extracted from the decrypted plaintext
///
/// A record maps positionally from a `place|date|time|order` segment.
/// Missing fields degrade to defaults rather than failing: the parser
/// always produces a record for every non-blank segment. Records are
/// immutable once constructed; sorting happens on copies of the ordering
/// key, never by mutating fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Place label, or the `(unknown place)` placeholder when absent
    pub place: String,

    /// Date text in `YYYY-MM-DD` form, empty when absent
    pub date: String,

    /// Time text in `HH:MM:SS` form, empty when absent
    pub time: String,

    /// Numeric ordering key parsed from the segment
    ///
    /// `None` when the field is missing, unparsable, or zero. Zero behaves
    /// identically to missing so that `#0` markers never appear in output.
    pub order: Option<f64>,

    /// The whitespace-trimmed source segment, retained for diagnostics
    pub raw: String,
}

impl Record {
    /// Build a record from positional fields, filling gaps with defaults
    pub fn from_fields(
        place: Option<&str>,
        date: Option<&str>,
        time: Option<&str>,
        order: Option<f64>,
        raw: &str,
    ) -> Self {
        let place = match place {
            Some(p) if !p.is_empty() => p.to_string(),
            _ => format::UNKNOWN_PLACE.to_string(),
        };

        Self {
            place,
            date: date.unwrap_or_default().to_string(),
            time: time.unwrap_or_default().to_string(),
            order,
            raw: raw.to_string(),
        }
    }

    /// Ordering key normalized for sorting: missing/unparsable/zero become 0
    pub fn order_key(&self) -> f64 {
        self.order.unwrap_or(0.0)
    }

    /// Check whether the record carries a date usable for duration math
    pub fn has_date(&self) -> bool {
        !self.date.is_empty()
    }

    /// Combined `date time` string, defaulting the time portion when absent
    ///
    /// Empty when the record has no date; a time without a date is not a
    /// usable instant.
    pub fn instant_text(&self) -> String {
        if self.date.is_empty() {
            return String::new();
        }
        let time = if self.time.is_empty() {
            format::DEFAULT_TIME
        } else {
            self.time.as_str()
        };
        format!("{} {}", self.date, time)
    }
}

// =============================================================================
// Stats Structure
// =============================================================================

/// Aggregate summary over one decrypted record sequence
///
/// Computed once per decode cycle from a non-empty, already-sorted sequence
/// and discarded with it. All fields are plain text so the presentation
/// layer never re-derives anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of records in the sequence
    pub total: usize,

    /// First record's date, possibly empty
    pub start_date: String,

    /// First record's time, possibly empty
    pub start_time: String,

    /// Last record's date, possibly empty
    pub end_date: String,

    /// Last record's time, possibly empty
    pub end_time: String,

    /// Formatted elapsed time between first and last record
    ///
    /// Empty when either endpoint has no date, an instant fails to parse,
    /// or the interval is negative.
    pub duration: String,
}
