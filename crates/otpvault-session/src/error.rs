//! Error types for the unlock path.

use thiserror::Error;

/// Errors that can occur while attempting to unlock the vault.
///
/// Every variant collapses to the same generic user-facing message via
/// [`crate::unlock::GENERIC_UNLOCK_ERROR`]; the specific cause is logged
/// server-side only, so callers cannot distinguish a wrong password from a
/// tampered file or a broken payload.
#[derive(Debug, Error)]
pub enum UnlockError {
    #[error("Password must not be empty")]
    EmptyPassword,

    #[error(transparent)]
    Crypto(#[from] otpvault_crypto::CryptoError),

    #[error("Decrypted payload is not a valid account list: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Key derivation task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Convenience result alias for unlock operations.
pub type Result<T> = std::result::Result<T, UnlockError>;
