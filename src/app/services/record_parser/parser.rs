//! Record sequence parsing for decrypted plaintext
//!
//! Splits plaintext on the record delimiter, maps each surviving segment
//! into a [`Record`], and returns the sequence sorted by ordering key.

use tracing::debug;

use super::field_parsers::{content_field, parse_order_field};
use crate::app::models::Record;
use crate::constants::format::{FIELD_DELIMITER, RECORD_DELIMITER};

/// Parse decrypted plaintext into an ordered record sequence
///
/// Empty plaintext yields an empty sequence; everything else yields one
/// record per non-blank segment. The sort is stable, so records whose
/// ordering keys normalize to the same value keep their input order.
pub fn parse_records(plaintext: &str) -> Vec<Record> {
    if plaintext.is_empty() {
        return Vec::new();
    }

    let mut records: Vec<Record> = plaintext
        .split(RECORD_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_segment)
        .collect();

    records.sort_by(|a, b| a.order_key().total_cmp(&b.order_key()));

    debug!("Parsed {} records from plaintext", records.len());
    records
}

/// Map one trimmed segment into a record
///
/// Fields map positionally to place, date, time, order. Fields beyond the
/// fourth are ignored; gaps are filled with defaults.
fn parse_segment(segment: &str) -> Record {
    let fields: Vec<&str> = segment.split(FIELD_DELIMITER).collect();

    Record::from_fields(
        content_field(&fields, 0),
        content_field(&fields, 1),
        content_field(&fields, 2),
        parse_order_field(&fields, 3),
        segment,
    )
}
