//! otpvault command-line interface.

pub mod commands;

use clap::{Parser, Subcommand};

/// otpvault - encrypted TOTP code viewer
#[derive(Parser)]
#[command(name = "otpvault")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve the unlock page and code endpoints
    Serve(commands::serve::ServeArgs),

    /// Encrypt a plaintext JSON account list into a vault file
    Encrypt(commands::encrypt::EncryptArgs),

    /// Show version information
    Version,
}

/// Run the CLI with the given arguments.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Encrypt(args) => commands::encrypt::run(args).await,
        Commands::Version => {
            println!("otpvault {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
