//! Summary statistics over a decrypted record sequence
//!
//! Given a sorted record sequence, this module derives the count, the first
//! and last records, and a compact elapsed-duration string. An empty
//! sequence produces no statistics at all; that is a normal outcome, not an
//! error, and the presentation layer renders placeholders for it.
//!
//! Duration derivation is strictly best-effort: if either endpoint lacks a
//! date, if a combined instant is not a valid calendar timestamp, or if the
//! last record precedes the first, the duration is reported as empty rather
//! than as a guess or a negative value.

pub mod aggregator;
pub mod duration;

#[cfg(test)]
pub mod tests;

// Re-export main operations for easy access
pub use aggregator::aggregate;
