#![allow(clippy::cargo_common_metadata)]
use anyhow::Result;
use nc_installer_builder::{
    cli, config::Config, core::BuildOutcome, setup_logging, utils::ProcessRunner,
};
use tracing::error;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = cli::parse_args();

    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    let outcome = match Config::from_args(&args) {
        Ok(config) => cli::execute(&config, ProcessRunner::new(config.debug)),
        Err(e) => {
            error!("{e}");
            BuildOutcome::from_error(&e)
        }
    };

    std::process::exit(outcome.exit_code)
}
