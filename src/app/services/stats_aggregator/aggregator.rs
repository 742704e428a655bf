//! Stats derivation over a sorted record sequence

use tracing::debug;

use super::duration::elapsed_between;
use crate::app::models::{Record, Stats};

/// Derive summary statistics from a sorted record sequence
///
/// Returns `None` for an empty sequence, meaning "nothing to report". The
/// sequence is only read; the first and last records provide the start and
/// end fields regardless of whether their dates are usable for the
/// duration.
pub fn aggregate(records: &[Record]) -> Option<Stats> {
    let first = records.first()?;
    let last = records.last()?;

    let duration = elapsed_between(first, last);
    debug!(
        "Aggregated {} records, duration '{}'",
        records.len(),
        duration
    );

    Some(Stats {
        total: records.len(),
        start_date: first.date.clone(),
        start_time: first.time.clone(),
        end_date: last.date.clone(),
        end_time: last.time.clone(),
        duration,
    })
}
