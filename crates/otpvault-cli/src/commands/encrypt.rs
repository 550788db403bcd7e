//! Encrypt command: the offline vault creation tool.
//!
//! Reads a plaintext JSON account list, validates the schema before any
//! cryptography runs, prompts for the password on a non-echoing terminal,
//! and writes the vault blob with restrictive permissions.

use anyhow::Context;
use clap::Args;
use otpvault_core::Account;
use std::path::PathBuf;

/// Encrypt command arguments.
#[derive(Args)]
pub struct EncryptArgs {
    /// Plaintext JSON file: an array of {"name": ..., "secret": ...}
    pub input: PathBuf,

    /// Output vault path (default: ~/.otpvault/vault.enc)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the encrypt command.
pub async fn run(args: EncryptArgs) -> anyhow::Result<()> {
    let plaintext = std::fs::read(&args.input)
        .with_context(|| format!("Could not read secrets file {}", args.input.display()))?;

    // Catch schema mistakes now, not at the first unlock attempt.
    let accounts: Vec<Account> = serde_json::from_slice(&plaintext)
        .context("Input is not a JSON array of {\"name\", \"secret\"} objects")?;
    if accounts.is_empty() {
        anyhow::bail!("Input contains no accounts");
    }

    let password = rpassword::prompt_password("Enter encryption password: ")
        .context("Failed to read password")?;
    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    let confirm = rpassword::prompt_password("Confirm encryption password: ")
        .context("Failed to read password")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let blob = otpvault_crypto::seal(password.as_bytes(), &plaintext)?;

    let output = match args.output {
        Some(path) => path,
        None => {
            otpvault_core::paths::ensure_base_dir()?;
            otpvault_core::paths::default_vault_file()?
        }
    };

    write_vault_file(&output, &blob)
        .with_context(|| format!("Failed to write vault file {}", output.display()))?;

    println!(
        "Encrypted {} account(s) -> {}",
        accounts.len(),
        output.display()
    );
    println!("You can now safely delete {}.", args.input.display());

    Ok(())
}

/// Write `data` to `path` with mode 0600 on Unix.
fn write_vault_file(path: &std::path::Path, data: &[u8]) -> std::io::Result<()> {
    std::fs::write(path, data)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(path, perms)?;
    }

    Ok(())
}
