// src/crypto/mod.rs

//! Low-level crypto primitives (KDF, AEAD, nonce generation).
//!
//! Sub-modules for primitives; see crate root for re-exports.
//! [`provider::CryptoProvider`] bundles the hash and AEAD behind one seam.

pub mod aead;
pub mod kdf;
pub mod provider;
pub mod rng;
