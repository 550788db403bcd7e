//! Concurrent TOTP code generation.
//!
//! One independent task per account, fan-in by joining every handle and
//! writing each result into the output slot matching its input index. The
//! pre-sized buffer makes ordering deterministic without any aggregation
//! lock, regardless of which task finishes first.

use totp_rs::{Algorithm, Secret, TOTP};
use tracing::warn;

use otpvault_core::types::CODE_ERROR_SENTINEL;
use otpvault_core::{Account, CodeDisplay};

/// Standard TOTP parameters: SHA-1, 6 digits, 30-second step.
const TOTP_DIGITS: usize = 6;
const TOTP_SKEW: u8 = 1;
const TOTP_STEP: u64 = 30;

/// Compute the current code for one base32 seed.
///
/// `None` on any per-account failure: malformed base32, empty seed, or a
/// clock error. The caller substitutes the sentinel.
fn current_code(secret: &str) -> Option<String> {
    let seed = Secret::Encoded(secret.to_string()).to_bytes().ok()?;
    if seed.is_empty() {
        return None;
    }
    // new_unchecked: real-world seeds are often shorter than the 128 bits
    // RFC 6238 wants, and the strict constructor rejects them.
    let totp = TOTP::new_unchecked(Algorithm::SHA1, TOTP_DIGITS, TOTP_SKEW, TOTP_STEP, seed);
    totp.generate_current().ok()
}

fn display_for(account: Account) -> CodeDisplay {
    let code = match current_code(&account.secret) {
        Some(code) => code,
        None => {
            warn!(name = %account.name, "could not generate code for account");
            CODE_ERROR_SENTINEL.to_string()
        }
    };
    CodeDisplay {
        name: account.name,
        code,
    }
}

/// Generate one current code per account, preserving input order.
///
/// Per-account failures become the `"Error"` sentinel in that slot; the
/// batch never aborts, and it only returns once every task has joined.
pub async fn generate(accounts: Vec<Account>) -> Vec<CodeDisplay> {
    // Pre-size the result buffer so each task's output lands at its own
    // input index even when completion order differs.
    let mut results: Vec<CodeDisplay> = accounts
        .iter()
        .map(|account| CodeDisplay {
            name: account.name.clone(),
            code: CODE_ERROR_SENTINEL.to_string(),
        })
        .collect();

    let handles: Vec<_> = accounts
        .into_iter()
        .map(|account| tokio::task::spawn_blocking(move || display_for(account)))
        .collect();

    for (idx, handle) in handles.into_iter().enumerate() {
        if let Ok(display) = handle.await {
            results[idx] = display;
        }
        // A panicked task leaves the sentinel already in place.
    }

    results
}
