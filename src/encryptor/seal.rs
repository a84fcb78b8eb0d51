//! src/encryptor/seal.rs
//! Nonce selection + AEAD sealing, no encoding
//!
//! Exact mirror of `decryptor/open.rs`.

use crate::aliases::{Aes256Key32, Nonce12};
use crate::cipher::NonceMode;
use crate::consts::{NONCE_LENGTH, TAG_LENGTH, ZERO_NONCE};
use crate::crypto::provider::CryptoProvider;
use crate::crypto::rng::random_nonce;

/// Seal `plaintext` under `key`, framing the nonce according to `nonce_mode`.
///
/// - [`NonceMode::Zero`] → `ciphertext || tag`
/// - [`NonceMode::Random`] → `nonce || ciphertext || tag`
#[inline]
pub fn seal_message<P: CryptoProvider>(
    provider: &P,
    key: &Aes256Key32,
    nonce_mode: NonceMode,
    plaintext: &[u8],
) -> Vec<u8> {
    match nonce_mode {
        NonceMode::Zero => provider.seal(key, &Nonce12::new(ZERO_NONCE), plaintext),
        NonceMode::Random => {
            let nonce = random_nonce();
            let sealed = provider.seal(key, &nonce, plaintext);

            let mut framed = Vec::with_capacity(NONCE_LENGTH + plaintext.len() + TAG_LENGTH);
            framed.extend_from_slice(nonce.expose_secret());
            framed.extend_from_slice(&sealed);
            framed
        }
    }
}
