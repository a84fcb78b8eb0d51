// src/crypto/rng.rs
//! Fresh nonces for [`NonceMode::Random`](crate::NonceMode::Random)
//!
//! Uses the thread-local CSPRNG from `rand` (reseeded from the OS), written
//! straight into a secure-gate buffer.

use crate::aliases::Nonce12;
use crate::consts::NONCE_LENGTH;
use rand::RngCore;

/// Generate a random 12-byte nonce.
#[inline]
#[must_use]
pub fn random_nonce() -> Nonce12 {
    let mut nonce = Nonce12::new([0u8; NONCE_LENGTH]);
    rand::rng().fill_bytes(nonce.expose_secret_mut());
    nonce
}
