//! Build orchestration for the CLI

use crate::{
    config::Config,
    core::{ArtifactValidator, BuildOutcome, BuildState, ExitStatusPropagator, PackageBuilder},
    error::Result,
    utils::process::ToolRunner,
};
use tracing::{debug, error, info, instrument};

/// Validate, package and propagate the toolchain status.
///
/// Never returns an error: failures become a [`BuildOutcome`] carrying
/// the exit code for the process.
pub fn execute<R: ToolRunner>(config: &Config, runner: R) -> BuildOutcome {
    match run(config, runner) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{e}");
            BuildOutcome::from_error(&e)
        }
    }
}

#[instrument(skip(config, runner), fields(version = %config.version))]
fn run<R: ToolRunner>(config: &Config, runner: R) -> Result<BuildOutcome> {
    let params = config.build_parameters();
    let mut state = BuildState::Init.advance(BuildState::Validating)?;

    info!(
        "Checking prebuilt binaries in {}",
        config.redist_dir().display()
    );
    let validator = ArtifactValidator::new(config.redist_dir());
    if let Err(e) = validator.validate(params.required_artifacts()) {
        state = state.advance(BuildState::Failed)?;
        debug!("Run {state}");
        return Err(e);
    }
    state = state.advance(BuildState::Building)?;

    let builder = PackageBuilder::new(config, runner);
    let command = format!(
        "{} {}",
        config.toolchain.program,
        builder.arguments(&params).join(" ")
    );
    let result = builder.build(&params);
    let outcome = result.and_then(|status| {
        ExitStatusPropagator::new().propagate(&command, status, &config.output_path(&params))
    });

    let next = if outcome.is_ok() {
        BuildState::Succeeded
    } else {
        BuildState::Failed
    };
    state = state.advance(next)?;
    debug!("Run {state}");

    outcome
}
