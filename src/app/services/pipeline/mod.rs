//! End-to-end decode pipeline
//!
//! This module chains the three core transformations into one unit from the
//! caller's perspective: decrypt the ciphertext, parse the plaintext into an
//! ordered record sequence, aggregate statistics over it.
//!
//! # Lifecycle
//!
//! Each [`Pipeline::process`] call is synchronous, runs to completion, and
//! allocates its output fresh; nothing is shared between cycles and nothing
//! from a previous cycle survives into the next. The pipeline itself holds
//! only the immutable cipher configuration, so one instance can serve any
//! number of independent calls.
//!
//! # Error policy
//!
//! Blank input is [`crate::Error::EmptyInput`], which callers treat as a
//! request to clear their output rather than as a failure. Every decryption
//! problem propagates as [`crate::Error::Decryption`]; shells collapse the
//! internal distinctions into the single generic user-facing message and
//! show no partial output.

#[cfg(test)]
pub mod tests;

use tracing::{debug, info};

use crate::app::models::{Record, Stats};
use crate::app::services::decryptor::decrypt_text;
use crate::app::services::record_parser::parse_records;
use crate::app::services::stats_aggregator::aggregate;
use crate::config::CryptoConfig;
use crate::{Error, Result};

/// The decrypt, parse, aggregate chain as one reusable unit
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: CryptoConfig,
}

/// Everything one decode cycle produces
///
/// Immutable once returned; ownership transfers to the caller outright.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    /// The decrypted plaintext, retained for display and copy-out
    pub plaintext: String,

    /// Records sorted ascending by normalized ordering key
    pub records: Vec<Record>,

    /// Summary statistics, `None` when no records were found
    pub stats: Option<Stats>,
}

impl Pipeline {
    /// Create a pipeline with the given cipher configuration
    pub fn new(config: CryptoConfig) -> Self {
        Self { config }
    }

    /// Run one full decode cycle over a pasted ciphertext blob
    pub fn process(&self, ciphertext: &str) -> Result<ProcessOutcome> {
        if ciphertext.trim().is_empty() {
            debug!("Blank input, nothing to process");
            return Err(Error::EmptyInput);
        }

        let plaintext = decrypt_text(ciphertext, &self.config)?;
        let records = parse_records(&plaintext);
        let stats = aggregate(&records);

        info!(
            "Decoded {} records from {} ciphertext characters",
            records.len(),
            ciphertext.len()
        );

        Ok(ProcessOutcome {
            plaintext,
            records,
            stats,
        })
    }
}
