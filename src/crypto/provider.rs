//! Crypto provider seam.
//!
//! The encrypt/decrypt paths never call a primitive directly; they go
//! through a [`CryptoProvider`] owned by the [`MessageCipher`](crate::MessageCipher).
//! [`Sha256AesGcm`] is the production provider. Tests can swap in doubles.

use crate::aliases::{Aes256Key32, Nonce12, PasswordString};
use crate::consts::{KEY_LENGTH, NONCE_LENGTH};
use crate::crypto::aead::{open_aes256gcm, seal_aes256gcm};
use crate::crypto::kdf::sha256::derive_secure_sha256_key;
use crate::error::HexsealError;

/// The hash and AEAD primitives the message cipher is built from.
///
/// Implementations must be stateless between calls: the same inputs always
/// give the same outputs, and concurrent calls do not interact.
pub trait CryptoProvider: Send + Sync {
    /// Hash the password into a 32-byte key. Total for every password.
    fn digest_into(&self, password: &PasswordString, out_key: &mut Aes256Key32);

    /// Encrypt and authenticate. Deterministic for a given key and nonce.
    fn seal(&self, key: &Aes256Key32, nonce: &Nonce12, plaintext: &[u8]) -> Vec<u8>;

    /// Verify and decrypt, failing with [`HexsealError::Authentication`] on any mismatch.
    fn open(&self, key: &Aes256Key32, nonce: &Nonce12, sealed: &[u8])
        -> Result<Vec<u8>, HexsealError>;
}

/// Zeroed key buffer filled by `provider`; dropped (and wiped) by the caller
/// at the end of the call.
#[inline]
pub(crate) fn derive_message_key<P: CryptoProvider + ?Sized>(
    provider: &P,
    password: &PasswordString,
) -> Aes256Key32 {
    let mut key = Aes256Key32::new([0u8; KEY_LENGTH]);
    provider.digest_into(password, &mut key);
    key
}

/// SHA-256 key derivation + AES-256-GCM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256AesGcm;

impl CryptoProvider for Sha256AesGcm {
    #[inline]
    fn digest_into(&self, password: &PasswordString, out_key: &mut Aes256Key32) {
        derive_secure_sha256_key(password, out_key);
    }

    #[inline]
    fn seal(&self, key: &Aes256Key32, nonce: &Nonce12, plaintext: &[u8]) -> Vec<u8> {
        seal_aes256gcm(key, nonce, plaintext)
    }

    #[inline]
    fn open(
        &self,
        key: &Aes256Key32,
        nonce: &Nonce12,
        sealed: &[u8],
    ) -> Result<Vec<u8>, HexsealError> {
        open_aes256gcm(key, nonce, sealed)
    }
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for &P {
    #[inline]
    fn digest_into(&self, password: &PasswordString, out_key: &mut Aes256Key32) {
        (**self).digest_into(password, out_key);
    }

    #[inline]
    fn seal(&self, key: &Aes256Key32, nonce: &Nonce12, plaintext: &[u8]) -> Vec<u8> {
        (**self).seal(key, nonce, plaintext)
    }

    #[inline]
    fn open(
        &self,
        key: &Aes256Key32,
        nonce: &Nonce12,
        sealed: &[u8],
    ) -> Result<Vec<u8>, HexsealError> {
        (**self).open(key, nonce, sealed)
    }
}
