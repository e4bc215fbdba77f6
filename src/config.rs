//! Configuration management for the installer builder
//!
//! Centralizes the fixed packaging conventions and validates CLI input.

use crate::{cli::Args, core::BuildParameters, error::InstallerError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Installer project directory; the toolchain runs here
    pub project_dir: PathBuf,
    /// Product version passed to the toolchain verbatim
    pub version: String,
    /// Packaging toolchain configuration
    pub toolchain: ToolchainConfig,
    /// Prebuilt artifact configuration
    pub artifacts: ArtifactConfig,
    /// Output package configuration
    pub package: PackageConfig,
}

/// Packaging toolchain configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolchainConfig {
    /// Toolchain executable name or path
    pub program: String,
    /// Toolchain subcommand
    pub subcommand: String,
    /// Packaging manifest, relative to the project directory
    pub manifest: PathBuf,
    /// Extension module loaded by the toolchain
    pub extension: String,
}

/// Prebuilt artifact configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Redistribution directory, relative to the project directory
    pub redist_dir: PathBuf,
    /// Executables that must exist before packaging, checked in order
    pub required: Vec<PathBuf>,
}

/// Output package configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Product name used in the output file name
    pub product_name: String,
    /// Platform component of the output file name
    pub platform: String,
    /// Architecture component of the output file name
    pub arch: String,
    /// Architecture identifier understood by the toolchain
    pub toolchain_arch: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            project_dir: PathBuf::from("."),
            version: crate::cli::DEFAULT_VERSION.to_string(),
            toolchain: ToolchainConfig::default(),
            artifacts: ArtifactConfig::default(),
            package: PackageConfig::default(),
        }
    }
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            program: "wix".to_string(),
            subcommand: "build".to_string(),
            manifest: PathBuf::from("Package.wxs"),
            extension: "WixToolset.UI.wixext".to_string(),
        }
    }
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            redist_dir: PathBuf::from("redist"),
            required: vec![
                PathBuf::from("ncclient.exe"),
                PathBuf::from("ncclient-tray.exe"),
            ],
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            product_name: "NebulaCommander".to_string(),
            platform: "windows".to_string(),
            arch: "amd64".to_string(),
            toolchain_arch: "x64".to_string(),
        }
    }
}

impl PackageConfig {
    /// Installer file name, `<ProductName>-<platform>-<arch>.msi`
    #[must_use]
    pub fn output_file_name(&self) -> String {
        format!("{}-{}-{}.msi", self.product_name, self.platform, self.arch)
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, InstallerError> {
        let project_dir = match &args.project_dir {
            Some(dir) => std::path::absolute(dir)
                .map_err(|e| InstallerError::file_system("resolve", dir, e))?,
            None => default_project_dir()?,
        };

        let mut config = Self {
            debug: args.debug,
            project_dir,
            version: args.version.clone(),
            ..Self::default()
        };
        config.toolchain.program.clone_from(&args.wix);

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), InstallerError> {
        if !self.project_dir.is_dir() {
            return Err(InstallerError::config(format!(
                "Installer project directory not found: {}",
                self.project_dir.display()
            )));
        }

        if self.toolchain.program.trim().is_empty() {
            return Err(InstallerError::config("Packaging tool must not be empty"));
        }

        validate_version(&self.version)
    }

    /// Absolute path of the redistribution directory
    #[must_use]
    pub fn redist_dir(&self) -> PathBuf {
        self.project_dir.join(&self.artifacts.redist_dir)
    }

    /// Build the immutable parameter set for one run
    #[must_use]
    pub fn build_parameters(&self) -> BuildParameters {
        BuildParameters::new(
            self.version.clone(),
            self.artifacts.required.clone(),
            self.package.output_file_name(),
        )
    }

    /// Path where the toolchain writes the installer
    #[must_use]
    pub fn output_path(&self, params: &BuildParameters) -> PathBuf {
        self.project_dir.join(params.output_file_name())
    }

    /// Arguments for the packaging toolchain, without the program itself
    #[must_use]
    pub fn get_toolchain_args(&self, params: &BuildParameters) -> Vec<String> {
        vec![
            self.toolchain.subcommand.clone(),
            path_arg(&self.toolchain.manifest),
            "-ext".to_string(),
            self.toolchain.extension.clone(),
            "-o".to_string(),
            params.output_file_name().to_string(),
            "-arch".to_string(),
            self.package.toolchain_arch.clone(),
            "-d".to_string(),
            format!("Version={}", params.version()),
        ]
    }
}

/// Directory containing the running executable
pub fn default_project_dir() -> Result<PathBuf, InstallerError> {
    let exe = std::env::current_exe()
        .map_err(|e| InstallerError::file_system("locate executable", "current_exe", e))?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        InstallerError::config(format!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Reject version strings the toolchain could misread as extra arguments
fn validate_version(version: &str) -> Result<(), InstallerError> {
    let re = Regex::new(r"^[^-\s]\S*$")
        .map_err(|e| InstallerError::config(format!("Failed to compile regex: {e}")))?;

    if re.is_match(version) {
        Ok(())
    } else {
        Err(InstallerError::validation(format!(
            "Invalid version string: {version:?}"
        )))
    }
}
