//! src/encryptor/encrypt.rs
//! Password + text → hex ciphertext
//! Zero secret exposure, auto-zeroizing key

use crate::aliases::{Aes256Key32, PasswordString};
use crate::cipher::NonceMode;
use crate::codec::encode_hex;
use crate::crypto::provider::{derive_message_key, CryptoProvider, Sha256AesGcm};
use crate::encryptor::seal::seal_message;
use tracing::trace;

/// Encrypt `message` under `password` with the default provider and the
/// constant zero nonce.
///
/// Never fails. The same inputs always give the same lowercase hex string of
/// `2 * (message.len() + 16)` characters.
///
/// ```
/// let hex = hexseal::encrypt_message("123", "hello");
/// assert_eq!(hex, "4efeecb2dd77a81d79de42aa7e1b91bd15f3284a95");
/// ```
#[inline]
#[must_use]
pub fn encrypt_message(password: &str, message: &str) -> String {
    let password = PasswordString::new(password.to_string());
    encrypt_with(&Sha256AesGcm, NonceMode::Zero, &password, message)
}

/// Encrypt with a key that has already been derived.
#[inline]
#[must_use]
pub fn encrypt_with_key<P: CryptoProvider>(
    provider: &P,
    key: &Aes256Key32,
    nonce_mode: NonceMode,
    message: &str,
) -> String {
    let sealed = seal_message(provider, key, nonce_mode, message.as_bytes());
    trace!(
        plaintext_len = message.len(),
        sealed_len = sealed.len(),
        ?nonce_mode,
        "sealed message"
    );
    encode_hex(&sealed)
}

pub(crate) fn encrypt_with<P: CryptoProvider>(
    provider: &P,
    nonce_mode: NonceMode,
    password: &PasswordString,
    message: &str,
) -> String {
    // Key lives only for this call
    let key = derive_message_key(provider, password);

    encrypt_with_key(provider, &key, nonce_mode, message)
}
