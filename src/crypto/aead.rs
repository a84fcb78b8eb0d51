//! src/crypto/aead.rs
//! AES-256-GCM seal/open over secure-gate key and nonce buffers
//!
//! No associated data. The sealed form is `ciphertext || tag` with a 16-byte
//! tag. Tag verification happens inside `aes-gcm` and is constant-time.

use crate::aliases::{Aes256Key32, Nonce12};
use crate::error::HexsealError;
use aes::Aes256;
use aes_gcm::aead::consts::U12;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{AesGcm, Nonce};

/// AES-256 in GCM mode with the standard 96-bit nonce.
type Aes256Gcm96 = AesGcm<Aes256, U12>;

/// Encrypt and authenticate `plaintext`.
///
/// Deterministic for a given key and nonce. Output length is
/// `plaintext.len() + TAG_LENGTH`.
///
/// # Panics
///
/// Panics if `plaintext` exceeds the GCM limit of 2^36 - 32 bytes (64 GiB).
#[inline]
#[must_use]
pub fn seal_aes256gcm(key: &Aes256Key32, nonce: &Nonce12, plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm96::new(key.expose_secret().into());
    let nonce: &Nonce<U12> = nonce.expose_secret().into();

    cipher
        .encrypt(nonce, plaintext)
        .expect("plaintext is within the AES-GCM length limit")
}

/// Verify the tag and decrypt `sealed`.
///
/// # Errors
///
/// Returns [`HexsealError::Authentication`] for a wrong key, any modified
/// byte, or input shorter than the tag.
#[inline]
pub fn open_aes256gcm(
    key: &Aes256Key32,
    nonce: &Nonce12,
    sealed: &[u8],
) -> Result<Vec<u8>, HexsealError> {
    let cipher = Aes256Gcm96::new(key.expose_secret().into());
    let nonce: &Nonce<U12> = nonce.expose_secret().into();

    cipher
        .decrypt(nonce, sealed)
        .map_err(|_| HexsealError::Authentication)
}
