//! Process execution utilities
//!
//! Runs the packaging toolchain with an explicit working directory and
//! reports its exit status without interpreting it.

use crate::error::{InstallerError, Result};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info, instrument};

/// Result of a process execution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit status code, absent when the process was killed by a signal
    pub exit_code: Option<i32>,
}

/// Something that can run an external tool to completion
pub trait ToolRunner {
    /// Run `program` with `args` inside `cwd`, blocking until it exits
    fn run_in_dir(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessResult>;
}

impl<T: ToolRunner + ?Sized> ToolRunner for &T {
    fn run_in_dir(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessResult> {
        (**self).run_in_dir(program, args, cwd)
    }
}

/// Utility for running external processes
#[derive(Debug)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Locate a program on PATH, or check an explicit path
    #[instrument(skip(self))]
    pub fn resolve_program(&self, program: &str) -> Result<PathBuf> {
        match which::which(program) {
            Ok(path) => {
                debug!("Resolved {} to {}", program, path.display());
                Ok(path)
            }
            Err(e) => Err(InstallerError::ToolNotFound {
                program: program.to_string(),
                source: Some(Box::new(e)),
            }),
        }
    }
}

impl ToolRunner for ProcessRunner {
    #[instrument(skip(self, args))]
    fn run_in_dir(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessResult> {
        let resolved = self.resolve_program(program)?;
        let cmd_str = format!("{} {}", program, args.join(" "));

        if self.debug {
            debug!("Running command in {}: {}", cwd.display(), cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => InstallerError::ToolNotFound {
                    program: program.to_string(),
                    source: Some(Box::new(e)),
                },
                _ => InstallerError::file_system("execute", &resolved, e),
            })?;

        debug!("Command finished: {}", status);
        Ok(ProcessResult {
            exit_code: status.code(),
        })
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_process_runner_creation() {
        let runner = ProcessRunner::new(true);
        assert!(runner.debug);

        let runner = ProcessRunner::default();
        assert!(!runner.debug);
    }

    #[test]
    fn test_missing_program_is_tool_not_found() {
        let runner = ProcessRunner::default();
        let temp_dir = TempDir::new().unwrap();

        let result = runner.run_in_dir("nonexistent_wix_12345", &[], temp_dir.path());
        assert!(matches!(result, Err(InstallerError::ToolNotFound { .. })));
        assert!(runner.resolve_program("nonexistent_wix_12345").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_runs_in_given_directory() {
        let runner = ProcessRunner::default();
        let temp_dir = TempDir::new().unwrap();

        let args = vec!["-c".to_string(), "touch marker".to_string()];
        let result = runner.run_in_dir("sh", &args, temp_dir.path()).unwrap();

        assert_eq!(result.exit_code, Some(0));
        assert!(temp_dir.path().join("marker").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_reports_nonzero_exit_code() {
        let runner = ProcessRunner::default();
        let temp_dir = TempDir::new().unwrap();

        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let result = runner.run_in_dir("sh", &args, temp_dir.path()).unwrap();

        assert_eq!(result.exit_code, Some(3));
    }
}
