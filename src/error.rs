//! Error types for the installer builder
//!
//! Every failure of a run maps onto a process exit code through
//! [`InstallerError::exit_code`].

use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported when a required prebuilt binary is missing
pub const EXIT_MISSING_ARTIFACT: i32 = 2;

/// Exit code reported when the packaging toolchain cannot be found
pub const EXIT_TOOL_NOT_FOUND: i32 = 127;

/// Generic failure (configuration, I/O, tool killed without exit code)
pub const EXIT_ERROR: i32 = 1;

/// Main error type for the installer builder
#[derive(Error, Debug)]
pub enum InstallerError {
    /// A required prebuilt binary is absent from the redistribution directory
    #[error("Missing required artifact: {}", .path.display())]
    MissingArtifact { path: PathBuf },

    /// The packaging toolchain ran and exited with a nonzero status
    #[error("Packaging tool failed with exit code {exit_code}: {command}")]
    ToolInvocationFailure { command: String, exit_code: i32 },

    /// The packaging toolchain is not installed or not on PATH
    #[error("Packaging tool not found: {program}")]
    ToolNotFound {
        program: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The packaging toolchain ended without reporting an exit code
    #[error("Packaging tool terminated without an exit code: {command}")]
    ToolTerminated { command: String },

    /// File system operation errors
    #[error("File system error: {operation} failed on {}", .path.display())]
    FileSystem {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl InstallerError {
    /// Create a new missing artifact error
    pub fn missing_artifact<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingArtifact { path: path.into() }
    }

    /// Create a new tool invocation failure
    pub fn tool_invocation(command: impl Into<String>, exit_code: i32) -> Self {
        Self::ToolInvocationFailure {
            command: command.into(),
            exit_code,
        }
    }

    /// Create a new tool-not-found error
    pub fn tool_not_found(program: impl Into<String>) -> Self {
        Self::ToolNotFound {
            program: program.into(),
            source: None,
        }
    }

    /// Create a new file system error
    pub fn file_system<P: Into<PathBuf>>(
        operation: impl Into<String>,
        path: P,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// Tool failures carry the tool's own status verbatim.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::MissingArtifact { .. } => EXIT_MISSING_ARTIFACT,
            Self::ToolInvocationFailure { exit_code, .. } => *exit_code,
            Self::ToolNotFound { .. } => EXIT_TOOL_NOT_FOUND,
            Self::ToolTerminated { .. }
            | Self::FileSystem { .. }
            | Self::Config { .. }
            | Self::Validation { .. } => EXIT_ERROR,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, InstallerError>;
