//! src/decryptor/decrypt.rs
//! Hex ciphertext + password → original text

use crate::aliases::{Aes256Key32, PasswordString};
use crate::cipher::NonceMode;
use crate::codec::decode_hex;
use crate::crypto::provider::{derive_message_key, CryptoProvider, Sha256AesGcm};
use crate::decryptor::open::open_message;
use crate::error::HexsealError;
use tracing::{debug, trace};

/// Decrypt a hex string produced by [`encrypt_message`](crate::encrypt_message).
///
/// # Errors
///
/// - [`HexsealError::Format`] if `hex_ciphertext` is not valid hex
/// - [`HexsealError::Authentication`] if the tag check fails, most often
///   because the password is wrong
///
/// ```
/// use hexseal::{decrypt_message, HexsealError};
///
/// let hex = "4efeecb2dd77a81d79de42aa7e1b91bd15f3284a95";
/// assert_eq!(decrypt_message("123", hex).unwrap(), "hello");
/// assert_eq!(decrypt_message("wrong", hex), Err(HexsealError::Authentication));
/// ```
#[inline]
pub fn decrypt_message(password: &str, hex_ciphertext: &str) -> Result<String, HexsealError> {
    let password = PasswordString::new(password.to_string());
    decrypt_with(&Sha256AesGcm, NonceMode::Zero, &password, hex_ciphertext)
}

/// Decrypt with a key that has already been derived.
///
/// Plaintext that is not valid UTF-8 (only possible for bytes sealed outside
/// [`encrypt_message`](crate::encrypt_message)) is decoded lossily with U+FFFD.
///
/// # Errors
///
/// Same as [`decrypt_message`].
pub fn decrypt_with_key<P: CryptoProvider>(
    provider: &P,
    key: &Aes256Key32,
    nonce_mode: NonceMode,
    hex_ciphertext: &str,
) -> Result<String, HexsealError> {
    let sealed = decode_hex(hex_ciphertext).inspect_err(|e| {
        debug!(hex_len = hex_ciphertext.len(), error = %e, "rejected ciphertext text");
    })?;

    let plaintext = open_message(provider, key, nonce_mode, &sealed).inspect_err(|_| {
        debug!(sealed_len = sealed.len(), ?nonce_mode, "authentication failed");
    })?;
    trace!(
        sealed_len = sealed.len(),
        plaintext_len = plaintext.len(),
        ?nonce_mode,
        "opened message"
    );

    Ok(String::from_utf8(plaintext)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned()))
}

pub(crate) fn decrypt_with<P: CryptoProvider>(
    provider: &P,
    nonce_mode: NonceMode,
    password: &PasswordString,
    hex_ciphertext: &str,
) -> Result<String, HexsealError> {
    let key = derive_message_key(provider, password);

    decrypt_with_key(provider, &key, nonce_mode, hex_ciphertext)
}
