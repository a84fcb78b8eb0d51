//! src/builders/cipher_builder.rs
//! MessageCipher builder: provider and nonce policy

use crate::cipher::{MessageCipher, NonceMode};
use crate::crypto::provider::{CryptoProvider, Sha256AesGcm};

/// [`MessageCipher`] builder
///
/// Defaults: [`Sha256AesGcm`] provider + [`NonceMode::Zero`], which produces
/// exactly the output of [`encrypt_message`](crate::encrypt_message).
#[derive(Debug, Clone)]
pub struct MessageCipherBuilder<P = Sha256AesGcm> {
    provider: P,
    nonce_mode: NonceMode,
}

impl MessageCipherBuilder {
    /// Create builder with compatible defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            provider: Sha256AesGcm,
            nonce_mode: NonceMode::default(),
        }
    }
}

impl<P: CryptoProvider> MessageCipherBuilder<P> {
    /// Set the nonce policy
    #[must_use]
    pub fn with_nonce_mode(mut self, nonce_mode: NonceMode) -> Self {
        self.nonce_mode = nonce_mode;
        self
    }

    /// Replace the crypto provider
    #[must_use]
    pub fn with_provider<Q: CryptoProvider>(self, provider: Q) -> MessageCipherBuilder<Q> {
        MessageCipherBuilder {
            provider,
            nonce_mode: self.nonce_mode,
        }
    }

    /// Current nonce policy
    #[must_use]
    pub const fn nonce_mode(&self) -> NonceMode {
        self.nonce_mode
    }

    /// Finish configuration
    #[must_use]
    pub fn build(self) -> MessageCipher<P> {
        MessageCipher::from_parts(self.provider, self.nonce_mode)
    }
}

impl Default for MessageCipherBuilder {
    fn default() -> Self {
        Self::new()
    }
}
