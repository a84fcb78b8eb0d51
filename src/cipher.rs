//! src/cipher.rs
//! Configured message cipher: provider + nonce policy

use crate::aliases::PasswordString;
use crate::builders::MessageCipherBuilder;
use crate::crypto::provider::{CryptoProvider, Sha256AesGcm};
use crate::decryptor::decrypt_with;
use crate::encryptor::encrypt_with;
use crate::error::HexsealError;

/// How the AES-GCM nonce is chosen for each message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NonceMode {
    /// All-zero nonce for every message. Ciphertext is `ciphertext || tag`.
    ///
    /// Output is deterministic, so the same password and message always give
    /// the same hex string. Every message under one password shares the
    /// nonce: two ciphertexts reveal the XOR of their plaintexts and allow
    /// tag forgery.
    #[default]
    Zero,

    /// Fresh random nonce per message, stored in front of the sealed bytes:
    /// `nonce || ciphertext || tag`. Not compatible with [`NonceMode::Zero`]
    /// output in either direction.
    Random,
}

/// Encrypts and decrypts text messages under a password.
///
/// Holds no per-call state; one instance can serve any number of concurrent
/// calls.
///
/// # Thread Safety
///
/// `Send + Sync` whenever the provider is, which [`CryptoProvider`] requires.
#[derive(Debug, Clone, Default)]
pub struct MessageCipher<P = Sha256AesGcm> {
    provider: P,
    nonce_mode: NonceMode,
}

impl MessageCipher {
    /// Cipher with the default provider and [`NonceMode::Zero`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a cipher.
    #[must_use]
    pub fn builder() -> MessageCipherBuilder {
        MessageCipherBuilder::new()
    }
}

impl<P: CryptoProvider> MessageCipher<P> {
    pub(crate) const fn from_parts(provider: P, nonce_mode: NonceMode) -> Self {
        Self {
            provider,
            nonce_mode,
        }
    }

    /// Active nonce policy
    #[must_use]
    pub const fn nonce_mode(&self) -> NonceMode {
        self.nonce_mode
    }

    /// Underlying provider
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Seal `message` under `password` and hex-encode the result.
    #[must_use]
    pub fn encrypt(&self, password: &PasswordString, message: &str) -> String {
        encrypt_with(&self.provider, self.nonce_mode, password, message)
    }

    /// Decode, verify and decrypt `hex_ciphertext`.
    ///
    /// # Errors
    ///
    /// [`HexsealError::Format`] for malformed hex, [`HexsealError::Authentication`]
    /// for a wrong password or modified/truncated ciphertext.
    pub fn decrypt(
        &self,
        password: &PasswordString,
        hex_ciphertext: &str,
    ) -> Result<String, HexsealError> {
        decrypt_with(&self.provider, self.nonce_mode, password, hex_ciphertext)
    }
}
