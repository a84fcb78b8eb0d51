//! src/batch_ops.rs
//! Parallel encrypt/decrypt of many messages under one password

use rayon::prelude::*;

use crate::aliases::PasswordString;
use crate::cipher::NonceMode;
use crate::crypto::provider::{derive_message_key, Sha256AesGcm};
use crate::decryptor::decrypt_with_key;
use crate::encryptor::encrypt_with_key;
use crate::HexsealError;

/// Encrypt every message; output order matches input order.
///
/// The key is derived once and shared read-only across worker threads.
pub fn encrypt_batch(messages: &[&str], password: &PasswordString) -> Vec<String> {
    let provider = Sha256AesGcm;
    let key = derive_message_key(&provider, password);

    messages
        .par_iter()
        .map(|message| encrypt_with_key(&provider, &key, NonceMode::Zero, message))
        .collect()
}

/// Decrypt every ciphertext; each result is independent of the others.
pub fn decrypt_batch(
    ciphertexts: &[&str],
    password: &PasswordString,
) -> Vec<Result<String, HexsealError>> {
    let provider = Sha256AesGcm;
    let key = derive_message_key(&provider, password);

    ciphertexts
        .par_iter()
        .map(|hex| decrypt_with_key(&provider, &key, NonceMode::Zero, hex))
        .collect()
}
