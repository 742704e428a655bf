//! Test utilities and fixtures for decryptor testing
//!
//! Known-answer ciphertexts were produced with an independent AES-128-CBC
//! implementation under the wire key and IV, so these tests pin wire
//! compatibility rather than just internal round-trip consistency.

use crate::config::CryptoConfig;


/// Ciphertext of `"hello"` under the wire-default key and IV
pub const HELLO_CIPHERTEXT: &str = "9fDrsIWAOvMhQTzFkUKN0w==";

/// Ciphertext of the two-record example from the export documentation
pub const OFFICE_HOME_CIPHERTEXT: &str =
    "rm36qILXK4IlXom8WUct3acv8szH8kKdKP83taDNaB5owxZCN5WLDke3bk9SMekKg+pCxG0BJ0YVb3JDUt3VnA==";

/// Plaintext matching [`OFFICE_HOME_CIPHERTEXT`]
pub const OFFICE_HOME_PLAINTEXT: &str =
    "Office|2024-01-02|09:00:00|1 & Home|2024-01-02|18:30:00|2";

/// Ciphertext of `"hello"` under the custom test key pair below
pub const HELLO_CUSTOM_CIPHERTEXT: &str = "e+3OsGVfOJQQaXifNkYgkQ==";

/// Build the custom key pair used by override tests
pub fn custom_config() -> CryptoConfig {
    CryptoConfig::from_parts("0123456789abcdef", "fedcba9876543210")
        .expect("test key material is block sized")
}
