//! Installer packaging
//!
//! Builds the toolchain invocation from validated parameters and runs it once.

use crate::{
    config::Config,
    core::params::BuildParameters,
    error::Result,
    utils::process::{ProcessResult, ToolRunner},
};
use tracing::{info, instrument};

/// Drives one run of the external packaging toolchain
pub struct PackageBuilder<'a, R: ToolRunner> {
    config: &'a Config,
    runner: R,
}

impl<'a, R: ToolRunner> PackageBuilder<'a, R> {
    /// Create a new package builder
    pub const fn new(config: &'a Config, runner: R) -> Self {
        Self { config, runner }
    }

    /// Full argument list passed to the toolchain
    #[must_use]
    pub fn arguments(&self, params: &BuildParameters) -> Vec<String> {
        self.config.get_toolchain_args(params)
    }

    /// Run the toolchain in the project directory and capture its status
    #[instrument(skip(self, params))]
    pub fn build(&self, params: &BuildParameters) -> Result<ProcessResult> {
        info!("Packaging {}", params.output_file_name());

        let args = self.arguments(params);
        self.runner.run_in_dir(
            &self.config.toolchain.program,
            &args,
            &self.config.project_dir,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, Vec<String>, PathBuf)>>,
    }

    impl ToolRunner for Recorder {
        fn run_in_dir(&self, program: &str, args: &[String], cwd: &Path) -> Result<ProcessResult> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec(), cwd.to_path_buf()));
            Ok(ProcessResult { exit_code: Some(0) })
        }
    }

    #[test]
    fn test_build_invokes_toolchain_once_in_project_dir() {
        let config = Config {
            project_dir: PathBuf::from("/work/installer"),
            version: "1.2.3".to_string(),
            ..Config::default()
        };
        let recorder = Recorder::default();
        let builder = PackageBuilder::new(&config, &recorder);

        let result = builder.build(&config.build_parameters()).unwrap();
        assert_eq!(result.exit_code, Some(0));

        let calls = recorder.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args, cwd) = &calls[0];
        assert_eq!(program, "wix");
        assert_eq!(cwd, Path::new("/work/installer"));
        assert!(args.iter().any(|a| a == "Version=1.2.3"));
        assert!(args.windows(2).any(|w| w[0] == "-arch" && w[1] == "x64"));
        assert!(args.windows(2).any(|w| w[0] == "-ext" && w[1] == "WixToolset.UI.wixext"));
    }
}
