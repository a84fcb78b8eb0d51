//! # Builders
//!
//! Builder patterns for configuring the message cipher.
//!
//! ## Modules
//!
//! - [`cipher_builder`] - Builder for [`MessageCipher`](crate::MessageCipher)
//!
//! ## Usage
//!
//! Builders provide a fluent API with the compatible defaults
//! (SHA-256 + AES-256-GCM, zero nonce) and optional customization.

pub mod cipher_builder;

pub use cipher_builder::MessageCipherBuilder;
