//! File system utility functions

use std::fs;
use std::io;
use std::path::Path;
use tracing::instrument;

/// Utility struct for file system operations
#[derive(Debug, Default)]
pub struct FileSystemUtils;

impl FileSystemUtils {
    /// Create a new file system utilities instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get file size in bytes
    #[instrument(skip(self))]
    pub fn file_size<P: AsRef<Path> + std::fmt::Debug>(&self, path: P) -> io::Result<u64> {
        let metadata = fs::metadata(path.as_ref())?;
        Ok(metadata.len())
    }
}
