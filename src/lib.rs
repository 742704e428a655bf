//! Trail Decoder Library
//!
//! A Rust library for decrypting AES-encrypted location trail exports and
//! reconstructing them into ordered timelines with summary statistics.
//!
//! This library provides tools for:
//! - Decrypting Base64-encoded AES-128-CBC ciphertext with the trail wire key
//! - Parsing the pipe/ampersand delimited record format into structured records
//! - Sorting records by their numeric ordering key with graceful defaults
//! - Deriving count, first/last record, and elapsed duration statistics
//! - Building render-ready timeline views for presentation layers

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod decryptor;
        pub mod pipeline;
        pub mod presentation;
        pub mod record_parser;
        pub mod stats_aggregator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Record, Stats};
pub use app::services::pipeline::{Pipeline, ProcessOutcome};
pub use config::CryptoConfig;

/// Result type alias for the trail decoder
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for trail decoding operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Ciphertext could not be decoded or decrypted under the configured key
    #[error("Decryption error: {message}")]
    Decryption { message: String },

    /// Caller passed an empty or blank input string
    ///
    /// Treated by callers as a no-op clear rather than a user-facing failure.
    #[error("Input is empty")]
    EmptyInput,

    /// Configuration error (bad key/IV override, invalid option combination)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a decryption error with context
    pub fn decryption(message: impl Into<String>) -> Self {
        Self::Decryption {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(error: base64::DecodeError) -> Self {
        Self::Decryption {
            message: format!("Invalid Base64 ciphertext: {}", error),
        }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::Decryption {
            message: "Decrypted bytes are not valid UTF-8 text".to_string(),
        }
    }
}
