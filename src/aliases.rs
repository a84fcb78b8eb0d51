//! # Secure-Gate Type Aliases
//!
//! Type aliases for secret material using [`secure-gate`](https://github.com/Slurp9187/secure-gate).
//! Every type here zeroizes on drop and only hands out its contents through
//! `.expose_secret()` / `.expose_secret_mut()`.
//!
//! - [`PasswordString`] - the user's password
//! - [`Aes256Key32`] - 32-byte key derived from the password
//! - [`Nonce12`] - 12-byte AES-GCM nonce

use secure_gate::dynamic_alias;
use secure_gate::fixed_alias;

// ─────────────────────────────────────────────────────────────────────────────
// Dynamic secrets
// ─────────────────────────────────────────────────────────────────────────────
dynamic_alias!(pub PasswordString, String);

// ─────────────────────────────────────────────────────────────────────────────
// Fixed-size secrets, alphabetical order
// ─────────────────────────────────────────────────────────────────────────────
fixed_alias!(pub Aes256Key32, 32); // SHA-256 of the password, AES-256 key
fixed_alias!(pub Nonce12, 12); // AES-GCM nonce
