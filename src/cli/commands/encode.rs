//! Encode command implementation
//!
//! Encrypts plaintext records into a Base64 trail export. The output of
//! this command decodes under the same key pair, which makes it the natural
//! way to mint test vectors and shareable blobs.

use anyhow::Result;
use tracing::debug;

use super::shared;
use crate::app::services::decryptor::encrypt_text;
use crate::cli::args::EncodeArgs;
use crate::config::CryptoConfig;

/// Run the encode command
pub fn run_encode(args: EncodeArgs) -> Result<()> {
    args.validate()?;
    shared::setup_logging(args.get_log_level())?;

    let config = CryptoConfig::with_overrides(args.key.as_deref(), args.iv.as_deref())?;
    let plaintext = shared::read_input_text(args.plaintext.as_deref(), args.input.as_deref())?;

    // Strip the trailing newline that file and stdin sources carry; it is
    // transport noise, not record content
    let trimmed = plaintext.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Plaintext input is empty");
    }

    let ciphertext = encrypt_text(trimmed, &config)?;
    debug!("Encoded {} plaintext characters", trimmed.len());

    println!("{}", ciphertext);
    Ok(())
}
