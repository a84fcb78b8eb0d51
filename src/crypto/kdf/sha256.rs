//! src/crypto/kdf/sha256.rs
//! Password → AES-256 key via one SHA-256 pass, out-param, zero-exposure

use crate::aliases::{Aes256Key32, PasswordString};
use crate::consts::KEY_LENGTH;
use sha2::{Digest, Sha256};

/// Derive the message key directly into caller buffer
///
/// - Single SHA-256 over the UTF-8 password bytes
/// - No salt, no iterations: the same password yields the same key in any process
/// - Any password is accepted, the empty string included
///
/// Nothing is stored alongside the ciphertext, so the password alone is
/// enough to decrypt. The flip side is that offline guessing costs one hash
/// per candidate.
#[inline(always)]
pub fn derive_secure_sha256_key(password: &PasswordString, out_key: &mut Aes256Key32) {
    let digest = Sha256::digest(password.expose_secret().as_bytes());
    out_key.expose_secret_mut().copy_from_slice(&digest);
}

/// Convenience: derive and return a fresh secure key
#[inline]
#[must_use]
pub fn derive_key(password: &PasswordString) -> Aes256Key32 {
    let mut key = Aes256Key32::new([0u8; KEY_LENGTH]);
    derive_secure_sha256_key(password, &mut key);
    key
}
