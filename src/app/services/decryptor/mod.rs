//! Ciphertext decryption for trail exports
//!
//! This module turns the Base64-encoded AES-128-CBC blobs produced by the
//! trail export tooling back into plaintext. The cipher parameters are fixed
//! process-wide constants carried by [`crate::config::CryptoConfig`]; there
//! is no key rotation and no per-call derivation.
//!
//! # Failure policy
//!
//! Decryption fails with [`crate::Error::Decryption`] when the input is not
//! valid Base64, when the ciphertext length is not block-aligned, when the
//! padding check fails under the configured key, or when the byte-level
//! result is empty or not UTF-8 text. An empty result decrypts "successfully"
//! at the cipher level but is a strong signal of wrong or corrupted input,
//! so it is reported as a failure.

pub mod cipher;

#[cfg(test)]
pub mod tests;

// Re-export main operations for easy access
pub use cipher::{decrypt_text, encrypt_text};
