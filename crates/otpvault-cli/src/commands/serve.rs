//! Serve command.

use anyhow::Context;
use clap::Args;
use otpvault_gateway::{Gateway, GatewayConfig, DEFAULT_PORT};
use std::path::PathBuf;
use tracing::info;

/// Serve command arguments.
#[derive(Args)]
pub struct ServeArgs {
    /// Path to the encrypted vault file (default: ~/.otpvault/vault.enc)
    #[arg(long, env = "OTPVAULT_VAULT")]
    pub vault: Option<PathBuf>,

    /// Port to listen on (always binds loopback)
    #[arg(short, long, env = "OTPVAULT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Run the serve command.
///
/// The vault file is read exactly once at startup; a missing or unreadable
/// vault is fatal, since the process cannot do anything without one.
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let path = match args.vault {
        Some(path) => path,
        None => otpvault_core::paths::default_vault_file()?,
    };

    let vault_blob = std::fs::read(&path).with_context(|| {
        format!(
            "Could not read vault file {}. Create one with `otpvault encrypt`.",
            path.display()
        )
    })?;

    info!(vault = %path.display(), len = vault_blob.len(), "vault file loaded");

    let gateway = Gateway::new(GatewayConfig { port: args.port }, vault_blob);
    gateway.run().await?;

    Ok(())
}
