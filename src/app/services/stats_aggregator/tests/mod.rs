//! Test utilities for stats aggregator testing

use crate::app::models::Record;


/// Build a record with the given place, date, time, and order
pub fn record(place: &str, date: &str, time: &str, order: Option<f64>) -> Record {
    Record::from_fields(
        Some(place).filter(|p| !p.is_empty()),
        Some(date).filter(|d| !d.is_empty()),
        Some(time).filter(|t| !t.is_empty()),
        order,
        &format!("{}|{}|{}", place, date, time),
    )
}
