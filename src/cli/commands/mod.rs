//! Command implementations for the trail decoder CLI
//!
//! This module contains the command execution logic and shared rendering
//! helpers for the CLI interface. Each command is implemented in its own
//! module:
//! - `decode`: decrypt a trail export and render the timeline
//! - `encode`: produce ciphertext consumable by the decode side

pub mod decode;
pub mod encode;
pub mod shared;

use anyhow::Result;

use crate::cli::args::{Args, Commands};

/// Main command runner for the trail decoder
///
/// Dispatches to the appropriate subcommand handler based on CLI args.
pub fn run(args: Args) -> Result<()> {
    match args.get_command() {
        Commands::Decode(decode_args) => decode::run_decode(decode_args),
        Commands::Encode(encode_args) => encode::run_encode(encode_args),
    }
}
