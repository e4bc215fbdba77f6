//! Run state and exit status propagation
//!
//! Turns the toolchain's exit status into the externally visible
//! [`BuildOutcome`]. Nonzero statuses are carried through unchanged.

use crate::{
    error::{InstallerError, Result},
    utils::{fs::FileSystemUtils, process::ProcessResult},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Lifecycle of a single build run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildState {
    Init,
    Validating,
    Building,
    Succeeded,
    Failed,
}

impl BuildState {
    /// Whether the run has finished
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }

    /// Whether `next` is a legal successor of this state
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Init, Self::Validating)
                | (Self::Validating, Self::Building | Self::Failed)
                | (Self::Building, Self::Succeeded | Self::Failed)
        )
    }

    /// Move to `next`, rejecting transitions the lifecycle does not allow
    pub fn advance(self, next: Self) -> Result<Self> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InstallerError::validation(format!(
                "Illegal build state transition: {self} -> {next}"
            )))
        }
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Validating => "validating",
            Self::Building => "building",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Externally observable result of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildOutcome {
    /// Process exit code
    pub exit_code: i32,
    /// Produced installer, only on success
    pub output_path: Option<PathBuf>,
}

impl BuildOutcome {
    /// Successful run that produced `output_path`
    pub fn succeeded<P: Into<PathBuf>>(output_path: P) -> Self {
        Self {
            exit_code: 0,
            output_path: Some(output_path.into()),
        }
    }

    /// Failed run with the given exit code
    #[must_use]
    pub const fn failed(exit_code: i32) -> Self {
        Self {
            exit_code,
            output_path: None,
        }
    }

    /// Failed run for `error`
    #[must_use]
    pub const fn from_error(error: &InstallerError) -> Self {
        Self::failed(error.exit_code())
    }
}

/// Maps a captured toolchain status onto the run's outcome
#[derive(Debug, Default)]
pub struct ExitStatusPropagator {
    fs_utils: FileSystemUtils,
}

impl ExitStatusPropagator {
    /// Create a new propagator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeed with `output_path` on status 0, otherwise fail with the exact status
    pub fn propagate(
        &self,
        command: &str,
        result: ProcessResult,
        output_path: &Path,
    ) -> Result<BuildOutcome> {
        match result.exit_code {
            Some(0) => {
                self.report_success(output_path);
                Ok(BuildOutcome::succeeded(output_path))
            }
            Some(code) => Err(InstallerError::tool_invocation(command, code)),
            None => Err(InstallerError::ToolTerminated {
                command: command.to_string(),
            }),
        }
    }

    fn report_success(&self, output_path: &Path) {
        match self.fs_utils.file_size(output_path) {
            Ok(size) => {
                #[allow(clippy::cast_precision_loss)]
                let size_mb = size as f64 / (1024.0 * 1024.0);
                info!("Built {} ({:.2} MB)", output_path.display(), size_mb);
            }
            Err(e) => {
                info!("Built {}", output_path.display());
                warn!(
                    "Packaging tool reported success but {} is not readable: {}",
                    output_path.display(),
                    e
                );
            }
        }
    }
}
