//! Parameters of a single installer build

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Immutable parameter set fixed at process start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParameters {
    version: String,
    required_artifacts: Vec<PathBuf>,
    output_file_name: String,
}

impl BuildParameters {
    /// Create a new parameter set
    #[must_use]
    pub const fn new(
        version: String,
        required_artifacts: Vec<PathBuf>,
        output_file_name: String,
    ) -> Self {
        Self {
            version,
            required_artifacts,
            output_file_name,
        }
    }

    /// Product version, exactly as given
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Required prebuilt artifacts, relative to the redistribution directory
    #[must_use]
    pub fn required_artifacts(&self) -> &[PathBuf] {
        &self.required_artifacts
    }

    /// Installer file name written by the toolchain
    #[must_use]
    pub fn output_file_name(&self) -> &str {
        &self.output_file_name
    }
}
