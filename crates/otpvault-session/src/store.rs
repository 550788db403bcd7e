//! The process-wide secret store.
//!
//! [`SecretStore`] is the only shared-mutable-state object in the process:
//! it owns the decrypted account list, the session expiry, and the live
//! session token, all behind one reader/writer lock. Handlers receive it as
//! an `Arc<SecretStore>`; there are no hidden statics.
//!
//! Token, expiry, and accounts always change together inside one write
//! lock, so there is no window where a token is valid while the accounts
//! are empty, or vice versa.

use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use otpvault_core::{constant_time_eq, Account};

use crate::token;

/// How long a session stays valid after unlock.
///
/// The bound keeps an unlocked vault from remaining readable indefinitely
/// after the user walks away. Compiled-in constant, like the KDF cost
/// parameters.
pub const SESSION_TTL: Duration = Duration::from_secs(3 * 60);

#[derive(Default)]
struct StoreState {
    accounts: Vec<Account>,
    session_expiry: Option<Instant>,
    session_token: String,
}

impl StoreState {
    fn is_unlocked(&self) -> bool {
        !self.accounts.is_empty()
            && self
                .session_expiry
                .is_some_and(|expiry| Instant::now() < expiry)
    }
}

/// Mutex-guarded holder of decrypted accounts and session state.
///
/// Multiple concurrent readers (code generation, status checks) never block
/// each other; any mutation takes the exclusive lock.
#[derive(Default)]
pub struct SecretStore {
    state: RwLock<StoreState>,
}

impl SecretStore {
    /// Create an empty (locked) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the vault is currently unlocked: accounts loaded and the
    /// session not yet expired. Expiry is checked lazily here rather than
    /// by a background timer.
    pub async fn is_unlocked(&self) -> bool {
        self.state.read().await.is_unlocked()
    }

    /// Atomically install a freshly decrypted account list, start a new
    /// session of length `ttl`, and issue a new token.
    ///
    /// The previous account set and token are replaced wholesale. Returns
    /// the new token. The token is generated before the lock is taken;
    /// nothing slow runs inside the critical section.
    pub async fn replace(&self, accounts: Vec<Account>, ttl: Duration) -> String {
        let new_token = token::issue();
        let expiry = Instant::now() + ttl;

        let mut state = self.state.write().await;
        info!(accounts = accounts.len(), "session replaced");
        state.accounts = accounts;
        state.session_expiry = Some(expiry);
        state.session_token = new_token.clone();

        new_token
    }

    /// Atomically drop the accounts and invalidate the token, returning
    /// the store to the locked state.
    ///
    /// Called on any landing visit that does not present the live token
    /// while a session is active: an ambiguous request is an implicit
    /// re-lock, not a silent continuation.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        if !state.accounts.is_empty() {
            debug!("store cleared, session revoked");
        }
        state.accounts.clear();
        state.session_expiry = None;
        state.session_token.clear();
    }

    /// Snapshot the account list for code generation.
    pub async fn accounts(&self) -> Vec<Account> {
        self.state.read().await.accounts.clone()
    }

    /// Validate a caller-supplied token against the live session.
    ///
    /// False when the store is locked or expired, when the candidate is
    /// empty, or on mismatch. Comparison is constant-time.
    pub async fn validate_token(&self, candidate: &str) -> bool {
        let state = self.state.read().await;
        if candidate.is_empty() || !state.is_unlocked() {
            return false;
        }
        constant_time_eq(candidate.as_bytes(), state.session_token.as_bytes())
    }
}
