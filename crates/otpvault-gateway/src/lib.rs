//! HTTP surface for otpvault.
//!
//! This crate provides:
//! - The landing page with the unlock form
//! - The unlock handler binding the password form to the session crate
//! - The token-gated `/api/codes` JSON endpoint

pub mod error;
pub mod render;
pub mod server;

pub use error::GatewayError;
pub use server::{Gateway, GatewayConfig, DEFAULT_PORT};

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
