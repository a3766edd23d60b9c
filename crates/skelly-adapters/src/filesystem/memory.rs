//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use skelly_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SkellyResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the builder owns
/// another. Every `create_dir_all` and `write_file` call bumps a counter,
/// which makes "nothing was written" directly assertable.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    read_only: BTreeSet<PathBuf>,
    write_ops: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write at or below `path` fail (permission denied).
    pub fn deny_writes_under(&self, path: impl Into<PathBuf>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.read_only.insert(path.into());
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// All directories, sorted.
    pub fn list_directories(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.directories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of mutating calls seen so far, including failed ones.
    pub fn write_ops(&self) -> usize {
        self.inner.read().map(|inner| inner.write_ops).unwrap_or(0)
    }
}

impl MemoryFilesystemInner {
    fn check_writable(&self, path: &Path) -> SkellyResult<()> {
        if self.read_only.iter().any(|ro| path.starts_with(ro)) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "Permission denied".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkellyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.write_ops += 1;
        inner.check_writable(path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SkellyResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.write_ops += 1;
        inner.check_writable(path)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("out/app/server")).unwrap();

        assert!(fs.is_dir(Path::new("out")));
        assert!(fs.is_dir(Path::new("out/app")));
        assert!(fs.is_dir(Path::new("out/app/server")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("nope/file.txt"), "x").is_err());

        fs.create_dir_all(Path::new("yes")).unwrap();
        fs.write_file(Path::new("yes/file.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("yes/file.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_state_and_counter() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();
        fs.create_dir_all(Path::new("a")).unwrap();
        fs.write_file(Path::new("a/b"), "").unwrap();

        assert_eq!(handle.write_ops(), 2);
        assert_eq!(handle.list_files(), [PathBuf::from("a/b")]);
    }

    #[test]
    fn denied_paths_fail() {
        let fs = MemoryFilesystem::new();
        fs.deny_writes_under("locked");

        assert!(fs.create_dir_all(Path::new("locked/inner")).is_err());
        assert!(fs.create_dir_all(Path::new("open")).is_ok());
        assert!(!fs.is_dir(Path::new("locked/inner")));
    }
}
