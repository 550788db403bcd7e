//! Password-based vault encryption for otpvault.
//!
//! Provides scrypt key derivation and the AES-256-GCM codec for the on-disk
//! vault layout `salt(32) ‖ nonce(12) ‖ ciphertext‖tag`.

pub mod codec;
pub mod error;
pub mod kdf;

pub use codec::{open, seal, NONCE_SIZE};
pub use error::{CryptoError, Result};
pub use kdf::{derive, DerivedKey, SALT_SIZE};
