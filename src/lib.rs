// src/lib.rs

//! Password-protected text messages: SHA-256 key derivation, AES-256-GCM,
//! lowercase hex transport.
//!
//! The default scheme uses a constant all-zero nonce, so the same password and
//! message always produce the same ciphertext. That makes every message under
//! one password share a nonce, which is unsafe once an attacker holds two
//! ciphertexts. [`NonceMode::Random`] is available through
//! [`MessageCipherBuilder`] at the cost of a different, non-deterministic
//! output format.

pub mod aliases;
#[cfg(feature = "batch-ops")]
pub mod batch_ops;
pub mod builders;
pub mod cipher;
pub mod codec;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;

// High-level API
pub use cipher::{MessageCipher, NonceMode};
pub use builders::MessageCipherBuilder;
pub use decryptor::decrypt_message;
pub use encryptor::encrypt_message;
pub use error::HexsealError;

// Low-level KDF, for callers that seal/open with `crypto::aead` directly
pub use crypto::kdf::sha256::derive_secure_sha256_key;

#[cfg(feature = "batch-ops")]
pub use batch_ops::{decrypt_batch, encrypt_batch};
