//! Command-line argument parsing and validation

use clap::Parser;
use std::path::PathBuf;

/// Version used when none is given on the command line
pub const DEFAULT_VERSION: &str = "0.0.0";

/// Nebula Commander MSI builder - packages prebuilt client binaries with WiX
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, disable_version_flag = true)]
#[command(name = "build-msi")]
pub struct Args {
    /// Product version embedded in the installer
    ///
    /// Passed to the toolchain verbatim; must be non-empty, must not start
    /// with '-' and must not contain whitespace.
    #[arg(short = 'v', long = "version", default_value = DEFAULT_VERSION)]
    pub version: String,

    /// Installer project directory holding the manifest and redist/ folder
    ///
    /// Defaults to the directory containing this executable.
    #[arg(long = "project-dir", env = "NC_INSTALLER_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Packaging toolchain executable
    #[arg(long = "wix", env = "NC_WIX", default_value = "wix")]
    pub wix: String,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_version() {
        let args = Args::try_parse_from(["build-msi"]).unwrap();
        assert_eq!(args.version, "0.0.0");
        assert!(!args.debug);
        assert_eq!(args.wix, "wix");
    }

    #[test]
    fn test_parse_version() {
        let args = Args::try_parse_from(["build-msi", "--version", "1.2.3"]).unwrap();
        assert_eq!(args.version, "1.2.3");

        let args = Args::try_parse_from(["build-msi", "-v", "2.0.1"]).unwrap();
        assert_eq!(args.version, "2.0.1");
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "build-msi",
            "--debug",
            "--project-dir",
            "client/windows/installer",
            "--wix",
            "/opt/wix/wix",
        ])
        .unwrap();
        assert!(args.debug);
        assert_eq!(
            args.project_dir,
            Some(PathBuf::from("client/windows/installer"))
        );
        assert_eq!(args.wix, "/opt/wix/wix");
    }
}
