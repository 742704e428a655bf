//! Application constants for the trail decoder
//!
//! This module contains the wire-format constants, default values, and
//! literal labels used throughout the trail decoder application.

// =============================================================================
// Wire Cipher Constants
// =============================================================================

/// Cipher constants for the trail export wire format
///
/// Existing exports were produced with this fixed key and IV. Changing either
/// value breaks compatibility with every ciphertext already in circulation,
/// so overrides are surfaced through [`crate::config::CryptoConfig`] rather
/// than edited here.
pub mod cipher {
    /// AES block size in bytes; ciphertext length must be a multiple of this
    pub const BLOCK_SIZE: usize = 16;

    /// Fixed 16-byte AES-128 key shared by all trail exports
    pub const DEFAULT_KEY: &[u8; 16] = b"13c91b2ef3022f85";

    /// Fixed 16-byte initialization vector paired with the key
    pub const DEFAULT_IV: &[u8; 16] = b"7794373177729563";
}

// =============================================================================
// Record Mini-Format Constants
// =============================================================================

/// Delimiters and field layout of the plaintext record format
pub mod format {
    /// Separator between records: `place|date|time|order & place|...`
    pub const RECORD_DELIMITER: char = '&';

    /// Separator between fields within a record
    pub const FIELD_DELIMITER: char = '|';

    /// Number of positional fields in a record segment
    pub const FIELD_COUNT: usize = 4;

    /// Label substituted when a record carries no place field
    pub const UNKNOWN_PLACE: &str = "(unknown place)";

    /// Combined date/time parse format for duration computation
    pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Time substituted when a record carries a date but no time
    pub const DEFAULT_TIME: &str = "00:00:00";
}

// =============================================================================
// User-Facing Messages
// =============================================================================

/// The single generic failure message shown for any pipeline failure
///
/// All internal failure distinctions (bad Base64, wrong key, empty result)
/// collapse into this one message at the presentation boundary.
pub const DECRYPT_FAILED_MESSAGE: &str =
    "Decryption failed: check that the ciphertext was copied and pasted correctly";

/// Placeholder shown for missing dates, times, and empty stats fields
pub const EMPTY_FIELD_PLACEHOLDER: &str = "-";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cipher_constants_are_block_sized() {
        assert_eq!(cipher::DEFAULT_KEY.len(), cipher::BLOCK_SIZE);
        assert_eq!(cipher::DEFAULT_IV.len(), cipher::BLOCK_SIZE);
    }

    #[test]
    fn test_format_constants() {
        assert_eq!(format::RECORD_DELIMITER, '&');
        assert_eq!(format::FIELD_DELIMITER, '|');
        assert_eq!(format::FIELD_COUNT, 4);
        assert!(!format::UNKNOWN_PLACE.is_empty());
    }
}
