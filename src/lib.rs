//! # Nebula Commander Installer Builder
//!
//! Packages the prebuilt Nebula Commander Windows client binaries into an
//! MSI installer by driving the WiX `wix build` toolchain.
//!
//! A run checks that every required binary exists under `redist/`, invokes
//! the toolchain once from the installer project directory, and exits with
//! the toolchain's own status.
//!
//! ## Example
//!
//! ```no_run
//! use nc_installer_builder::{cli, config::Config, utils::ProcessRunner};
//!
//! let config = Config::default();
//! let outcome = cli::execute(&config, ProcessRunner::default());
//! std::process::exit(outcome.exit_code);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
