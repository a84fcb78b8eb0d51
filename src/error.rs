//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! Every fallible operation returns [`Result<T, HexsealError>`](HexsealError).
//! Key derivation and sealing are total, so only decoding and opening can fail.

use thiserror::Error;

/// The error type for all hexseal operations.
///
/// The set of variants is closed: callers can branch on the kind instead of
/// parsing messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexsealError {
    /// Malformed hex input.
    ///
    /// Returned when the ciphertext text has an odd number of digits or
    /// contains a character outside `[0-9a-fA-F]` (after an optional leading
    /// `0x`). The message names the offending character and its position.
    #[error("Format error: {0}")]
    Format(String),

    /// Authentication tag verification failed.
    ///
    /// Covers a wrong password, tampered ciphertext and truncated input alike.
    /// The variant deliberately carries no detail about which of these occurred.
    #[error("decryption failed: password may be incorrect")]
    Authentication,
}

impl HexsealError {
    /// Whether the caller may retry after correcting its input.
    ///
    /// Retrying an authentication failure with the same inputs cannot succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}
