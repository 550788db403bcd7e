//! Shared data types.
//!
//! The vault plaintext is a JSON array of [`Account`] entries; the store
//! holds them in memory after a successful unlock. [`CodeDisplay`] is the
//! ephemeral per-account view recomputed on every code fetch.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel code rendered when a single account's code cannot be computed.
pub const CODE_ERROR_SENTINEL: &str = "Error";

/// One TOTP account as stored in the vault.
///
/// `secret` is the base32-encoded TOTP seed. Accounts are immutable once
/// loaded for a session; the whole set is replaced on each unlock, never
/// merged.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Account {
    /// Display name, e.g. "github".
    pub name: String,

    /// Base32 TOTP seed.
    pub secret: String,
}

// Never print the seed, even in debug output.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("name", &self.name)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// One current code for display, paired with its account name.
///
/// Output ordering always matches the account ordering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeDisplay {
    /// Account display name.
    pub name: String,

    /// Six-digit TOTP code, or [`CODE_ERROR_SENTINEL`] on per-account
    /// failure.
    pub code: String,
}
