//! # Constants
//!
//! Fixed sizes of the sealed-message format and the default nonce.

/// Length of the derived key in bytes (SHA-256 output, AES-256 key size).
pub const KEY_LENGTH: usize = 32;

/// Length of the AES-GCM nonce in bytes.
pub const NONCE_LENGTH: usize = 12;

/// Length of the AES-GCM authentication tag appended to every ciphertext.
pub const TAG_LENGTH: usize = 16;

/// The constant nonce used by [`NonceMode::Zero`](crate::NonceMode::Zero).
///
/// Reusing one nonce for every message under the same password makes
/// ciphertexts deterministic, and it lets an observer of two ciphertexts
/// XOR out the plaintexts and forge tags. Kept for compatibility; see
/// [`NonceMode::Random`](crate::NonceMode::Random) for the alternative.
pub const ZERO_NONCE: [u8; NONCE_LENGTH] = [0u8; NONCE_LENGTH];
