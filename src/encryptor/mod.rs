// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt_message(password, message)` → lowercase hex.
//! Lower level: `encrypt_with_key` for callers holding a derived key,
//! `seal_message` for the raw nonce-framed bytes.

pub(crate) mod encrypt;
pub(crate) mod seal;

pub use encrypt::{encrypt_message, encrypt_with_key};
pub(crate) use encrypt::encrypt_with;
pub use seal::seal_message;
