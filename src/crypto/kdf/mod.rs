//! # Key Derivation
//!
//! Turns a password into the 32-byte AES-256 key.
//!
//! ## Modules
//!
//! - [`sha256`] - single unsalted SHA-256 over the UTF-8 password
//!
//! ## Usage
//!
//! For most use cases, use the high-level [`encrypt_message`](crate::encrypt_message)
//! and [`decrypt_message`](crate::decrypt_message) functions, which derive the
//! key automatically. The function here is exposed for callers that seal or
//! open with [`crate::crypto::aead`] directly.

pub mod sha256;
