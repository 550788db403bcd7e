//! The unlock control path.
//!
//! Binds vault decryption, store mutation, and token issuance into the
//! single "attempt unlock" operation. Key derivation is the one
//! intentionally slow step in the process, so it runs on the blocking pool
//! before any store lock is taken — a password attempt never serializes
//! unrelated reads.

use tracing::{info, warn};

use otpvault_core::{Account, SecretString};

use crate::error::{Result, UnlockError};
use crate::store::{SecretStore, SESSION_TTL};

/// The one user-facing message for every unlock failure.
///
/// Wrong password, tampered file, truncated blob, and malformed payload are
/// indistinguishable to callers; surfacing which step failed would hand an
/// attacker a password/tamper oracle.
pub const GENERIC_UNLOCK_ERROR: &str = "Invalid password or corrupted data.";

impl UnlockError {
    /// The message safe to show externally. Always generic; the specific
    /// cause goes to server-side logs only.
    pub fn public_message(&self) -> &'static str {
        GENERIC_UNLOCK_ERROR
    }
}

/// Attempt to unlock the vault.
///
/// On success the store atomically holds the new account list with a fresh
/// 3-minute session, and the new token is returned for the caller to embed
/// in its response. On any failure the store is left untouched and the
/// state machine stays Locked.
pub async fn unlock(
    vault_blob: &[u8],
    password: &SecretString,
    store: &SecretStore,
) -> Result<String> {
    if password.is_empty() {
        return Err(UnlockError::EmptyPassword);
    }

    let blob = vault_blob.to_vec();
    let password_bytes = password.expose_secret().as_bytes().to_vec();

    // scrypt + AEAD open, off the async runtime and outside any lock.
    let plaintext = tokio::task::spawn_blocking(move || {
        otpvault_crypto::open(&password_bytes, &blob)
    })
    .await?
    .map_err(|e| {
        warn!("vault decryption failed: {e}");
        e
    })?;

    let accounts: Vec<Account> = serde_json::from_slice(&plaintext).map_err(|e| {
        warn!("decrypted payload failed schema validation: {e}");
        e
    })?;

    let count = accounts.len();
    let token = store.replace(accounts, SESSION_TTL).await;
    info!(accounts = count, "vault unlocked");

    Ok(token)
}
