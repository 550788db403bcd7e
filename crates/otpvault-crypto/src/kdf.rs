//! scrypt key derivation with fixed cost parameters.
//!
//! The parameters are compiled-in constants and must stay identical between
//! the encrypt and decrypt paths: they are not stored in the vault, so
//! changing them invalidates every existing vault file.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, Result};

/// Salt length in the vault layout.
pub const SALT_SIZE: usize = 32;

/// Derived key length (AES-256).
pub const KEY_SIZE: usize = 32;

/// scrypt work factor, log2: N = 2^15 = 32768.
const SCRYPT_LOG_N: u8 = 15;

/// scrypt block size.
const SCRYPT_R: u32 = 8;

/// scrypt parallelism.
const SCRYPT_P: u32 = 1;

/// A 32-byte symmetric key derived from a password.
///
/// Never persisted; zeroed on drop. Exists only for the duration of one
/// seal or open call.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey([u8; KEY_SIZE]);

impl DerivedKey {
    /// Borrow the raw key bytes for cipher construction.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

/// Derive a 256-bit key from `password` and `salt` via scrypt.
///
/// Deterministic: the same password and salt always reproduce the same key.
/// Fails only on an invalid parameter combination, never on password
/// content.
pub fn derive(password: &[u8], salt: &[u8; SALT_SIZE]) -> Result<DerivedKey> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_SIZE)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    let mut key = [0u8; KEY_SIZE];
    scrypt::scrypt(password, salt, &params, &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    Ok(DerivedKey(key))
}
