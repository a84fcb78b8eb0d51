//! Hex transport codec.
//!
//! Sealed messages are raw bytes; the caller moves them around as text.
//! [`encode_hex`] always emits lowercase digits, [`decode_hex`] accepts either
//! case and an optional leading `0x`.

use crate::error::HexsealError;
use hex::FromHexError;

/// Prefix stripped from hex input before decoding.
pub const HEX_PREFIX: &str = "0x";

/// Encode bytes as lowercase hex, two characters per byte, in order.
#[inline]
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into bytes.
///
/// An empty string (or a bare `0x`) decodes to an empty vector.
///
/// # Errors
///
/// Returns [`HexsealError::Format`] if the digit count is odd or a character
/// outside `[0-9a-fA-F]` is present. Positions in the message refer to the
/// string as passed in, prefix included.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, HexsealError> {
    let (offset, digits) = match text.strip_prefix(HEX_PREFIX) {
        Some(rest) => (HEX_PREFIX.len(), rest),
        None => (0, text),
    };

    // Characters first, so the message names the real char, not a UTF-8 byte
    if let Some((index, c)) = digits.char_indices().find(|(_, c)| !c.is_ascii_hexdigit()) {
        return Err(HexsealError::Format(format!(
            "invalid hex character {c:?} at position {}",
            index + offset
        )));
    }

    hex::decode(digits).map_err(|e| match e {
        FromHexError::InvalidHexCharacter { c, index } => HexsealError::Format(format!(
            "invalid hex character {c:?} at position {}",
            index + offset
        )),
        FromHexError::OddLength => HexsealError::Format(format!(
            "odd number of hex digits ({})",
            digits.len()
        )),
        other => HexsealError::Format(other.to_string()),
    })
}
