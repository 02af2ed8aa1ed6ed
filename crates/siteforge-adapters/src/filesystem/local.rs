//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use siteforge_core::{application::ports::Filesystem, error::SiteforgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SiteforgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SiteforgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> siteforge_core::error::SiteforgeError {
    use siteforge_core::application::ApplicationError;

    ApplicationError::Io {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = dir.path().join("nested/out.txt");

        fs.create_dir_all(target.parent().unwrap()).unwrap();
        fs.write_file(&target, "hello").unwrap();

        assert!(fs.exists(&target));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello");
    }

    #[test]
    fn write_into_missing_dir_fails_with_io() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let target = dir.path().join("missing/out.txt");

        let err = fs.write_file(&target, "x").unwrap_err();
        assert!(err.to_string().contains("write file"));
    }
}
