//! src/decryptor/open.rs
//! Nonce recovery + AEAD opening, no decoding
//!
//! Exact mirror of `encryptor/seal.rs`.

use crate::aliases::{Aes256Key32, Nonce12};
use crate::cipher::NonceMode;
use crate::consts::{NONCE_LENGTH, ZERO_NONCE};
use crate::crypto::provider::CryptoProvider;
use crate::error::HexsealError;

/// Verify and open bytes produced by [`seal_message`](crate::encryptor::seal_message).
///
/// # Errors
///
/// [`HexsealError::Authentication`] on tag mismatch, or when the input is too
/// short to hold a nonce (random mode) or a tag.
#[inline]
pub fn open_message<P: CryptoProvider>(
    provider: &P,
    key: &Aes256Key32,
    nonce_mode: NonceMode,
    sealed: &[u8],
) -> Result<Vec<u8>, HexsealError> {
    match nonce_mode {
        NonceMode::Zero => provider.open(key, &Nonce12::new(ZERO_NONCE), sealed),
        NonceMode::Random => {
            if sealed.len() < NONCE_LENGTH {
                return Err(HexsealError::Authentication);
            }
            let (nonce_bytes, body) = sealed.split_at(NONCE_LENGTH);

            let mut nonce = Nonce12::new([0u8; NONCE_LENGTH]);
            nonce.expose_secret_mut().copy_from_slice(nonce_bytes);

            provider.open(key, &nonce, body)
        }
    }
}
