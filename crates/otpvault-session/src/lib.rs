//! In-memory session and secret lifecycle for otpvault.
//!
//! This crate owns everything that happens between a successful vault
//! decryption and the codes shown to the user:
//!
//! - [`SecretStore`]: the single lock-guarded holder of decrypted accounts
//!   and session state
//! - [`unlock`]: the password-to-session control path
//! - [`codes::generate`]: concurrent per-account TOTP code computation

pub mod codes;
pub mod error;
pub mod store;
pub mod token;
pub mod unlock;

pub use error::{Result, UnlockError};
pub use store::{SecretStore, SESSION_TTL};
pub use unlock::{unlock, GENERIC_UNLOCK_ERROR};
