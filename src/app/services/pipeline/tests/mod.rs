//! Test fixtures for pipeline testing
//!
//! Ciphertext fixtures were produced with an independent AES-128-CBC
//! implementation under the wire key and IV.


/// Decrypts to `"Park|2024-03-01|08:00:00|2 & Gate|2024-03-01|07:30:00|1"`
pub const PARK_GATE_CIPHERTEXT: &str =
    "HcBHmqq6lfVkLyxTGC9tw7yVjZYdd1i/BhaVw3cU+ZCxywemPXNgp90p27sTy8iQ/zJflfsS2HefDI2XWuLTKw==";

/// Decrypts to `"Cafe|2024-05-05|12:00:00|1"`
pub const CAFE_CIPHERTEXT: &str = "CuT9XZKkxpbmVjAdNyslwODMj9K3qZ+pPpxIxD4P4RU=";
