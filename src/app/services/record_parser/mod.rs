//! Plaintext record parsing for decrypted trail exports
//!
//! This module splits decrypted plaintext into individual records using the
//! two-level delimiter scheme (`&` between records, `|` between fields) and
//! produces a sequence sorted by the numeric ordering key.
//!
//! # Parsing philosophy
//!
//! Parsing never fails. Malformed fields degrade to defaults instead of
//! raising errors: a missing place becomes a placeholder label, missing
//! date/time become empty strings, and a missing or unparsable ordering key
//! normalizes to zero for sorting. The trade-off is deliberate: a timeline
//! with placeholder gaps beats strict validation that rejects the whole
//! export over one damaged segment.
//!
//! Records that tie at a normalized ordering key of zero keep their input
//! order. The stable sort makes that fallback predictable.

pub mod field_parsers;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main operations for easy access
pub use parser::parse_records;
