//! Timeline and stats view structures

use serde::{Deserialize, Serialize};

use crate::app::models::{Record, Stats};

/// One render-ready timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Display marker: `#<order>`, or `#<position>` when the record has no
    /// usable ordering key
    pub marker: String,

    /// Place label (already defaulted by the parser)
    pub place: String,

    /// Date text, possibly empty
    pub date: String,

    /// Time text, possibly empty
    pub time: String,

    /// Whether this is the final entry of the timeline
    ///
    /// The rendering shell highlights the most recent event.
    pub is_latest: bool,
}

/// Render-ready summary block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsView {
    /// Number of records decoded
    pub total: usize,

    /// First record's date and time joined for display, possibly empty
    pub start: String,

    /// Last record's date and time joined for display, possibly empty
    pub end: String,

    /// Formatted elapsed time, possibly empty
    pub duration: String,
}

/// The complete render-ready result of one decode cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineView {
    /// Timeline entries in display order
    pub entries: Vec<TimelineEntry>,

    /// Summary block, `None` when there is nothing to report
    pub stats: Option<StatsView>,
}

impl TimelineView {
    /// Build a view from a sorted record sequence and its statistics
    pub fn build(records: &[Record], stats: Option<&Stats>) -> Self {
        let last_index = records.len().saturating_sub(1);
        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| TimelineEntry {
                marker: entry_marker(record, index),
                place: record.place.clone(),
                date: record.date.clone(),
                time: record.time.clone(),
                is_latest: index == last_index,
            })
            .collect();

        Self {
            entries,
            stats: stats.map(StatsView::from_stats),
        }
    }

    /// The cleared state shown when there is no input at all
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            stats: None,
        }
    }
}

impl StatsView {
    /// Flatten statistics into display fields
    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total: stats.total,
            start: join_stamp(&stats.start_date, &stats.start_time),
            end: join_stamp(&stats.end_date, &stats.end_time),
            duration: stats.duration.clone(),
        }
    }
}

/// Marker text for one entry
///
/// Records with a usable ordering key show it verbatim (`2.5` stays `#2.5`,
/// `2.0` displays as `#2`); records without one fall back to their
/// one-based timeline position.
fn entry_marker(record: &Record, index: usize) -> String {
    match record.order {
        Some(order) => format!("#{}", order),
        None => format!("#{}", index + 1),
    }
}

/// Join a date and time for display, skipping whichever parts are empty
fn join_stamp(date: &str, time: &str) -> String {
    match (date.is_empty(), time.is_empty()) {
        (false, false) => format!("{} {}", date, time),
        (false, true) => date.to_string(),
        (true, false) => time.to_string(),
        (true, true) => String::new(),
    }
}
