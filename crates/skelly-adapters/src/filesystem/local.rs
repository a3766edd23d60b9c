//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use skelly_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SkellyError, SkellyResult},
};

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
    fn create_dir_all(&self, path: &Path) -> SkellyResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SkellyResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SkellyError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn create_dir_all_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a/b/c");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.create_dir_all(&dir).unwrap();
        assert!(fs.is_dir(&dir));
    }

    #[test]
    fn write_file_into_missing_parent_fails_with_path() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("missing/file.txt");

        let err = LocalFilesystem::new().write_file(&file, "x").unwrap_err();
        match err {
            SkellyError::Application(ApplicationError::Filesystem { path, reason }) => {
                assert_eq!(path, file);
                assert!(reason.starts_with("Failed to write file"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn file_is_not_a_dir() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        let fs = LocalFilesystem::new();
        fs.write_file(&file, "hello").unwrap();

        assert!(file.exists());
        assert!(!fs.is_dir(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "hello");
    }
}
