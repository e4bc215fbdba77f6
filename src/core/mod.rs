//! Core functionality for installer packaging
//!
//! Contains artifact validation, toolchain invocation and exit status
//! propagation.

pub mod outcome;
pub mod package;
pub mod params;
pub mod validator;

pub use outcome::{BuildOutcome, BuildState, ExitStatusPropagator};
pub use package::PackageBuilder;
pub use params::BuildParameters;
pub use validator::{ArtifactCheckResult, ArtifactValidator};
