//! android-run - CMake/Ninja cross-compile, deploy and emulator helper
//!
//! Wraps the Android NDK toolchain, the device bridge and the emulator behind
//! three subcommands. Every external failure terminates the run with a
//! non-zero exit status.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod exec;
mod ops;

use cli::{Cli, Commands};
use config::ToolchainConfig;
use ops::{AbiTarget, BuildProfile};

/// Application name
pub const APP_NAME: &str = "android-run";

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    info!("{} v{} starting", APP_NAME, VERSION);
    let cli = Cli::parse();

    if let Err(err) = dispatch(cli).await {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = ToolchainConfig::resolve()?;

    match cli.command {
        Commands::Build => {
            ops::build::execute(&config, AbiTarget::X86_64, BuildProfile::Debug).await?
        }
        Commands::Run { program } => ops::run::execute(&config, &program).await?,
        Commands::Emulator { .. } => ops::emulator::execute(&config).await?,
    }

    Ok(())
}
