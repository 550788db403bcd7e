//! AES-256-GCM vault codec.
//!
//! On-disk layout: `salt(32) ‖ nonce(12) ‖ ciphertext‖tag`. No version
//! byte, no header, no associated data — any layout change breaks every
//! existing vault file.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use rand::RngCore;
use tracing::debug;

use crate::error::{CryptoError, Result};
use crate::kdf::{self, SALT_SIZE};

/// AES-GCM nonce length.
pub const NONCE_SIZE: usize = 12;

/// Minimum valid vault blob length: salt plus nonce. Anything shorter is
/// malformed before a single cipher operation runs.
const MIN_VAULT_LEN: usize = SALT_SIZE + NONCE_SIZE;

/// Encrypt `plaintext` under `password`, producing a complete vault blob.
///
/// A fresh random salt and nonce are generated per call, so sealing the
/// same plaintext twice yields different blobs and a nonce is never reused
/// for a given derived key.
pub fn seal(password: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_SIZE];
    rand::thread_rng().fill_bytes(&mut salt);

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::thread_rng().fill_bytes(&mut nonce_bytes);

    let key = kdf::derive(password, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let mut blob = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);

    debug!(len = blob.len(), "sealed vault blob");
    Ok(blob)
}

/// Decrypt a vault blob produced by [`seal`].
///
/// Returns [`CryptoError::MalformedVault`] if the blob is too short to
/// contain the salt and nonce, and [`CryptoError::Authentication`] if the
/// GCM tag does not verify — the dominant failure mode for a wrong
/// password, indistinguishable from a corrupted or tampered file.
pub fn open(password: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    if blob.len() < MIN_VAULT_LEN {
        return Err(CryptoError::MalformedVault);
    }

    let (salt_bytes, rest) = blob.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(salt_bytes);

    let key = kdf::derive(password, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    let nonce = Nonce::from_slice(nonce_bytes);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| CryptoError::Authentication)
}
