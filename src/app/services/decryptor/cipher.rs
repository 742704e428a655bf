//! AES-128-CBC cipher operations for the trail wire format
//!
//! Both directions work on in-memory strings only: Base64 transport encoding
//! on the outside, PKCS#7-padded CBC blocks on the inside.

use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use tracing::debug;

use crate::config::CryptoConfig;
use crate::constants::cipher::BLOCK_SIZE;
use crate::{Error, Result};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;

/// Decrypt a Base64-encoded ciphertext blob into plaintext
///
/// ASCII whitespace inside the blob is ignored so that ciphertext pasted
/// with line wrapping still decodes. Pure function of the input and the
/// configured key material.
pub fn decrypt_text(ciphertext: &str, config: &CryptoConfig) -> Result<String> {
    let compact: String = ciphertext
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    if compact.is_empty() {
        return Err(Error::decryption("Ciphertext is empty".to_string()));
    }

    let data = BASE64.decode(compact.as_bytes())?;

    if data.is_empty() || data.len() % BLOCK_SIZE != 0 {
        return Err(Error::decryption(format!(
            "Ciphertext length {} is not a multiple of the {}-byte block size",
            data.len(),
            BLOCK_SIZE
        )));
    }

    let plaintext = Aes128CbcDec::new(&config.key.into(), &config.iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(&data)
        .map_err(|_| {
            Error::decryption("Padding check failed under the configured key".to_string())
        })?;

    if plaintext.is_empty() {
        return Err(Error::decryption(
            "Decryption produced an empty result".to_string(),
        ));
    }

    let text = String::from_utf8(plaintext)?;
    debug!(
        "Decrypted {} ciphertext bytes into {} plaintext bytes",
        data.len(),
        text.len()
    );

    Ok(text)
}

/// Encrypt plaintext into a Base64-encoded ciphertext blob
///
/// The inverse of [`decrypt_text`]: output produced here under the default
/// configuration is consumable by any holder of the wire key. Empty
/// plaintext is rejected because it would decrypt to the empty result that
/// [`decrypt_text`] treats as failure.
pub fn encrypt_text(plaintext: &str, config: &CryptoConfig) -> Result<String> {
    if plaintext.is_empty() {
        return Err(Error::EmptyInput);
    }

    let ciphertext = Aes128CbcEnc::new(&config.key.into(), &config.iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    debug!(
        "Encrypted {} plaintext bytes into {} ciphertext bytes",
        plaintext.len(),
        ciphertext.len()
    );

    Ok(BASE64.encode(ciphertext))
}
