//! Error types for vault encryption.

use thiserror::Error;

/// Errors that can occur during vault encryption or decryption.
///
/// `Authentication` deliberately carries no detail: a wrong password and a
/// tampered vault are indistinguishable to callers, and the same generic
/// user-facing message must be shown for both.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    #[error("Authentication failed")]
    Authentication,

    #[error("Vault data is malformed")]
    MalformedVault,

    #[error("Encryption failed: {0}")]
    Encryption(String),
}

/// Convenience result alias for crypto operations.
pub type Result<T> = std::result::Result<T, CryptoError>;
