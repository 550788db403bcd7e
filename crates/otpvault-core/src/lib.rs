//! # otpvault-core
//!
//! Core types and utilities shared across the otpvault crates:
//!
//! - **Types**: the decrypted [`Account`] list and the per-request
//!   [`CodeDisplay`] view returned to callers
//! - **Secrets**: [`SecretString`], a zero-on-drop string with
//!   constant-time equality
//! - **Paths**: resolution of the default vault location under `~/.otpvault`

pub mod error;
pub mod paths;
pub mod secret;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use secret::{constant_time_eq, SecretString};
pub use types::{Account, CodeDisplay};
