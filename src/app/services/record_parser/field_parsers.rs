//! Field parsing utilities for record segments
//!
//! Helper functions for extracting positional fields from a split segment
//! with the graceful-default policy applied per field type.

/// Get a positional field that carries content
///
/// Returns `None` when the field is absent or an empty string, which lets
/// callers substitute per-field defaults.
pub fn content_field<'a>(fields: &[&'a str], index: usize) -> Option<&'a str> {
    fields.get(index).copied().filter(|s| !s.is_empty())
}

/// Parse the numeric ordering key from a positional field
///
/// The field is trimmed before parsing. Missing, unparsable, non-numeric,
/// and zero values all yield `None`; zero is folded into "missing" so the
/// sort and the `#<order>` marker treat it as an absent key.
pub fn parse_order_field(fields: &[&str], index: usize) -> Option<f64> {
    fields
        .get(index)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| !v.is_nan() && *v != 0.0)
}
