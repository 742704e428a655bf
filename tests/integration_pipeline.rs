//! Integration tests for the full decode pipeline through the public API
//!
//! These tests exercise the library exactly as the CLI shell does: raw text
//! in, structured result or typed failure out. Ciphertext fixtures were
//! generated with an independent AES-128-CBC implementation under the wire
//! key to pin compatibility with existing exports.

use anyhow::Result;
use trail_decoder::app::services::decryptor::{decrypt_text, encrypt_text};
use trail_decoder::app::services::presentation::TimelineView;
use trail_decoder::{CryptoConfig, Error, Pipeline};

/// Decrypts to `"Park|2024-03-01|08:00:00|2 & Gate|2024-03-01|07:30:00|1"`
const PARK_GATE_CIPHERTEXT: &str =
    "HcBHmqq6lfVkLyxTGC9tw7yVjZYdd1i/BhaVw3cU+ZCxywemPXNgp90p27sTy8iQ/zJflfsS2HefDI2XWuLTKw==";

#[test]
fn test_wire_compatible_decode() -> Result<()> {
    let pipeline = Pipeline::default();

    let outcome = pipeline.process(PARK_GATE_CIPHERTEXT)?;

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].place, "Gate");
    assert_eq!(outcome.records[1].place, "Park");

    let stats = outcome.stats.expect("two records produce stats");
    assert_eq!(stats.total, 2);
    assert_eq!(stats.duration, "30m 0s");

    Ok(())
}

#[test]
fn test_encrypt_decrypt_round_trip() -> Result<()> {
    let config = CryptoConfig::default();
    let plaintext = "Museum|2024-09-10|11:00:00|1 & Harbour|2024-09-10|14:45:30|2 & Hotel";

    let ciphertext = encrypt_text(plaintext, &config)?;
    assert_eq!(decrypt_text(&ciphertext, &config)?, plaintext);

    let outcome = Pipeline::default().process(&ciphertext)?;
    assert_eq!(outcome.plaintext, plaintext);
    assert_eq!(outcome.records.len(), 3);

    // The dateless record still lands in the timeline with defaults
    assert_eq!(outcome.records[0].place, "Hotel");
    assert_eq!(outcome.records[0].order, None);

    Ok(())
}

#[test]
fn test_pipeline_failure_shows_no_partial_output() {
    let pipeline = Pipeline::default();

    // Valid Base64, wrong content: the error carries no records or stats,
    // matching the all-or-nothing presentation contract
    let result = pipeline.process("QUJDREVGR0hJSktMTU5PUA==");
    assert!(matches!(result, Err(Error::Decryption { .. })));
}

#[test]
fn test_blank_input_is_a_no_op() {
    let pipeline = Pipeline::default();

    let result = pipeline.process("  \n  ");
    assert!(matches!(result, Err(Error::EmptyInput)));
}

#[test]
fn test_view_build_from_pipeline_outcome() -> Result<()> {
    let outcome = Pipeline::default().process(PARK_GATE_CIPHERTEXT)?;
    let view = TimelineView::build(&outcome.records, outcome.stats.as_ref());

    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.entries[0].marker, "#1");
    assert_eq!(view.entries[0].place, "Gate");
    assert!(view.entries[1].is_latest);

    let stats = view.stats.expect("stats view present");
    assert_eq!(stats.start, "2024-03-01 07:30:00");
    assert_eq!(stats.end, "2024-03-01 08:00:00");

    Ok(())
}

#[test]
fn test_custom_key_pair_is_isolated() -> Result<()> {
    let custom = CryptoConfig::from_parts("aaaabbbbccccdddd", "ddddccccbbbbaaaa")?;
    let ciphertext = encrypt_text("Vault|2024-02-02|02:00:00|1", &custom)?;

    assert_eq!(
        Pipeline::new(custom).process(&ciphertext)?.records[0].place,
        "Vault"
    );

    // Under the wire default the blob must not decode to anything usable
    match Pipeline::default().process(&ciphertext) {
        Err(Error::Decryption { .. }) => {}
        Ok(outcome) => assert_ne!(outcome.plaintext, "Vault|2024-02-02|02:00:00|1"),
        Err(other) => panic!("unexpected error kind: {other}"),
    }

    Ok(())
}
