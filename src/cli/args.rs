//! Command-line argument definitions for the trail decoder
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the trail decoder
///
/// Decrypts AES-encrypted location trail exports and reconstructs them into
/// ordered timelines with summary statistics.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trail-decoder",
    version,
    about = "Decrypt location trail exports and reconstruct timeline summaries",
    long_about = "Decrypts Base64-encoded AES-128-CBC trail exports with the shared wire key, \
                  parses the pipe/ampersand record format into an ordered timeline, and derives \
                  count, first/last record, and elapsed-duration statistics. The encode command \
                  produces ciphertext consumable by the decode side."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the trail decoder
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decrypt a trail export and print the reconstructed timeline
    Decode(DecodeArgs),
    /// Encrypt plaintext records into a shareable trail export
    Encode(EncodeArgs),
}

/// Arguments for the decode command (main decoding workflow)
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Ciphertext to decode
    ///
    /// The Base64 blob as pasted from a trail export. When omitted, the
    /// ciphertext is read from --input or from stdin.
    #[arg(value_name = "CIPHERTEXT", help = "Ciphertext blob to decode")]
    pub ciphertext: Option<String>,

    /// Read the ciphertext from a file instead of the command line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "ciphertext",
        help = "Read ciphertext from a file"
    )]
    pub input: Option<PathBuf>,

    /// Output format for the decoded timeline
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the decoded timeline"
    )]
    pub format: OutputFormat,

    /// Print the raw decrypted plaintext alongside the timeline
    ///
    /// The exact decrypted text before any record parsing, for copy-out
    /// workflows.
    #[arg(long = "show-plaintext", help = "Also print the raw decrypted plaintext")]
    pub show_plaintext: bool,

    /// Override the wire cipher key (requires --iv)
    ///
    /// Exactly 16 ASCII bytes. The default key decrypts every existing
    /// trail export; overriding breaks compatibility by design.
    #[arg(long = "key", value_name = "KEY", requires = "iv", help = "Override the cipher key")]
    pub key: Option<String>,

    /// Override the cipher initialization vector (requires --key)
    #[arg(long = "iv", value_name = "IV", requires = "key", help = "Override the cipher IV")]
    pub iv: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the encode command (ciphertext production)
#[derive(Debug, Clone, Parser)]
pub struct EncodeArgs {
    /// Plaintext records to encrypt
    ///
    /// Records in `place|date|time|order & ...` form. When omitted, the
    /// plaintext is read from --input or from stdin.
    #[arg(value_name = "PLAINTEXT", help = "Plaintext records to encrypt")]
    pub plaintext: Option<String>,

    /// Read the plaintext from a file instead of the command line
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        conflicts_with = "plaintext",
        help = "Read plaintext from a file"
    )]
    pub input: Option<PathBuf>,

    /// Override the wire cipher key (requires --iv)
    #[arg(long = "key", value_name = "KEY", requires = "iv", help = "Override the cipher key")]
    pub key: Option<String>,

    /// Override the cipher initialization vector (requires --key)
    #[arg(long = "iv", value_name = "IV", requires = "key", help = "Override the cipher IV")]
    pub iv: Option<String>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for decode results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored timeline
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(self.input.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

impl EncodeArgs {
    /// Validate the encode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        validate_input_file(self.input.as_deref())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        log_level(self.quiet, self.verbose)
    }
}

fn validate_input_file(input: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = input {
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

fn log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
