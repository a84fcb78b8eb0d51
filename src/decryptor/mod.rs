// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt_message(password, hex_ciphertext)?` → original text.
//! Lower level: `decrypt_with_key` for callers holding a derived key,
//! `open_message` for the raw nonce-framed bytes.

pub(crate) mod decrypt;
pub(crate) mod open;

pub use decrypt::{decrypt_message, decrypt_with_key};
pub(crate) use decrypt::decrypt_with;
pub use open::open_message;
