//! Path resolution utilities.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Get the otpvault base directory (~/.otpvault).
pub fn base_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(Error::NoHomeDir)?;
    Ok(home.join(".otpvault"))
}

/// Get the default vault file path (~/.otpvault/vault.enc).
pub fn default_vault_file() -> Result<PathBuf> {
    Ok(base_dir()?.join("vault.enc"))
}

/// Ensure the base directory exists.
pub fn ensure_base_dir() -> Result<PathBuf> {
    let dir = base_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
