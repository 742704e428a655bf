//! Configuration management and validation.
//!
//! Provides the cipher configuration for decrypt/encrypt cycles. The default
//! configuration carries the fixed wire key and IV so existing trail exports
//! keep decrypting; explicit overrides are validated here rather than at the
//! cipher call site.

use crate::constants::cipher;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cipher key material for one decode or encode cycle
///
/// Holds the AES-128 key and CBC initialization vector as fixed 16-byte
/// arrays. Construction validates length once so the decryptor never has to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoConfig {
    /// 16-byte AES-128 key
    pub key: [u8; 16],

    /// 16-byte CBC initialization vector
    pub iv: [u8; 16],
}

impl CryptoConfig {
    /// Build a configuration from key and IV strings
    ///
    /// Both values must be exactly 16 bytes when encoded as UTF-8, matching
    /// the wire format's use of ASCII key material.
    pub fn from_parts(key: &str, iv: &str) -> Result<Self> {
        let key = Self::to_block("key", key)?;
        let iv = Self::to_block("iv", iv)?;
        debug!("Using caller-supplied cipher configuration");
        Ok(Self { key, iv })
    }

    /// Apply optional overrides on top of the wire defaults
    ///
    /// Supplying only one of the pair is rejected: a custom key with the
    /// well-known IV (or vice versa) is never what the caller intends.
    pub fn with_overrides(key: Option<&str>, iv: Option<&str>) -> Result<Self> {
        match (key, iv) {
            (None, None) => Ok(Self::default()),
            (Some(key), Some(iv)) => Self::from_parts(key, iv),
            _ => Err(Error::configuration(
                "Key and IV overrides must be supplied together".to_string(),
            )),
        }
    }

    /// Check whether this configuration is the wire-compatible default
    pub fn is_wire_default(&self) -> bool {
        &self.key == cipher::DEFAULT_KEY && &self.iv == cipher::DEFAULT_IV
    }

    fn to_block(name: &str, value: &str) -> Result<[u8; 16]> {
        let bytes = value.as_bytes();
        bytes.try_into().map_err(|_| {
            Error::configuration(format!(
                "Cipher {} must be exactly {} bytes, got {}",
                name,
                cipher::BLOCK_SIZE,
                bytes.len()
            ))
        })
    }
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            key: *cipher::DEFAULT_KEY,
            iv: *cipher::DEFAULT_IV,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_wire_compatible() {
        let config = CryptoConfig::default();
        assert!(config.is_wire_default());
        assert_eq!(&config.key, cipher::DEFAULT_KEY);
        assert_eq!(&config.iv, cipher::DEFAULT_IV);
    }

    #[test]
    fn test_from_parts_valid() {
        let config = CryptoConfig::from_parts("0123456789abcdef", "fedcba9876543210").unwrap();
        assert_eq!(&config.key, b"0123456789abcdef");
        assert_eq!(&config.iv, b"fedcba9876543210");
        assert!(!config.is_wire_default());
    }

    #[test]
    fn test_from_parts_rejects_wrong_length() {
        assert!(CryptoConfig::from_parts("too-short", "fedcba9876543210").is_err());
        assert!(CryptoConfig::from_parts("0123456789abcdef", "way-too-long-for-a-block").is_err());
        assert!(CryptoConfig::from_parts("", "").is_err());
    }

    #[test]
    fn test_from_parts_counts_bytes_not_chars() {
        // 16 chars but 17 bytes once UTF-8 encoded
        assert!(CryptoConfig::from_parts("0123456789abcdéf", "fedcba9876543210").is_err());
    }

    #[test]
    fn test_with_overrides() {
        assert!(CryptoConfig::with_overrides(None, None).unwrap().is_wire_default());

        let custom =
            CryptoConfig::with_overrides(Some("0123456789abcdef"), Some("fedcba9876543210"))
                .unwrap();
        assert!(!custom.is_wire_default());

        // One half of the pair alone is a configuration error
        assert!(CryptoConfig::with_overrides(Some("0123456789abcdef"), None).is_err());
        assert!(CryptoConfig::with_overrides(None, Some("fedcba9876543210")).is_err());
    }
}
