//! Render-ready views over decoded results
//!
//! This module is the contract between the core pipeline and whatever
//! rendering shell consumes it. It flattens records and statistics into
//! plain display fields (timeline markers, latest-entry flag) so that
//! renderers never re-derive anything; substituting dash placeholders for
//! missing values is left to the renderer because it is a display decision.

pub mod view;

// Re-export main types for easy access
pub use view::{StatsView, TimelineEntry, TimelineView};
