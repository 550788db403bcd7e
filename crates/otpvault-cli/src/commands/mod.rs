//! CLI command implementations.

pub mod encrypt;
pub mod serve;
