//! Prebuilt artifact validation
//!
//! Confirms every required binary is present before any packaging work.

use crate::error::{InstallerError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Existence check of a single artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheckResult {
    /// Fully resolved artifact path
    pub path: PathBuf,
    /// Whether the artifact is present
    pub exists: bool,
}

/// Read-only validator over a base directory
#[derive(Debug)]
pub struct ArtifactValidator {
    base_dir: PathBuf,
}

impl ArtifactValidator {
    /// Create a validator resolving artifacts under `base_dir`
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Check one artifact relative to the base directory
    pub fn check<P: AsRef<Path>>(&self, artifact: P) -> ArtifactCheckResult {
        let path = self.base_dir.join(artifact);
        let exists = path.is_file();
        debug!("Artifact {}: exists={}", path.display(), exists);
        ArtifactCheckResult { path, exists }
    }

    /// Check artifacts in order, stopping at the first missing one
    #[instrument(skip(self, artifacts), fields(base_dir = %self.base_dir.display()))]
    pub fn validate(&self, artifacts: &[PathBuf]) -> Result<()> {
        for artifact in artifacts {
            let result = self.check(artifact);
            if !result.exists {
                return Err(InstallerError::missing_artifact(result.path));
            }
        }

        info!("All {} required artifacts present", artifacts.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn artifacts() -> Vec<PathBuf> {
        vec![
            PathBuf::from("ncclient.exe"),
            PathBuf::from("ncclient-tray.exe"),
        ]
    }

    #[test]
    fn test_all_present() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ncclient.exe"), "MZ").unwrap();
        fs::write(temp_dir.path().join("ncclient-tray.exe"), "MZ").unwrap();

        let validator = ArtifactValidator::new(temp_dir.path());
        assert!(validator.validate(&artifacts()).is_ok());
    }

    #[test]
    fn test_reports_full_path_of_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("ncclient.exe"), "MZ").unwrap();

        let validator = ArtifactValidator::new(temp_dir.path());
        match validator.validate(&artifacts()) {
            Err(InstallerError::MissingArtifact { path }) => {
                assert_eq!(path, temp_dir.path().join("ncclient-tray.exe"));
            }
            other => panic!("Expected MissingArtifact, got {other:?}"),
        }
    }

    #[test]
    fn test_fails_on_first_missing() {
        let temp_dir = TempDir::new().unwrap();

        let validator = ArtifactValidator::new(temp_dir.path());
        match validator.validate(&artifacts()) {
            Err(InstallerError::MissingArtifact { path }) => {
                assert_eq!(path, temp_dir.path().join("ncclient.exe"));
            }
            other => panic!("Expected MissingArtifact, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_an_artifact() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("ncclient.exe")).unwrap();

        let validator = ArtifactValidator::new(temp_dir.path());
        assert!(!validator.check("ncclient.exe").exists);
    }

    #[test]
    fn test_empty_list_passes() {
        let temp_dir = TempDir::new().unwrap();
        let validator = ArtifactValidator::new(temp_dir.path());
        assert!(validator.validate(&[]).is_ok());
    }
}
