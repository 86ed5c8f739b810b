//! Storage capability used by the materializer
//!
//! The generation core never touches the file system directly. It goes
//! through [`Storage`], backed by [`LocalStorage`] for real runs and by
//! [`MemoryStorage`] for tests and dry runs.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

/// File-system primitives the materializer needs
pub trait Storage {
    /// Whether anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Create or replace a file; the parent directory must exist
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl Storage for LocalStorage {
    fn exists(&self, path: &Path) -> bool {
        // Dangling symlinks count as taken
        std::fs::symlink_metadata(path).is_ok()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// One recorded storage call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    CreateDir(PathBuf),
    Write(PathBuf),
}

/// In-memory storage that records every call, in order
#[derive(Debug, Default)]
pub struct MemoryStorage {
    directories: RefCell<BTreeSet<PathBuf>>,
    files: RefCell<BTreeMap<PathBuf, String>>,
    operations: RefCell<Vec<StorageOp>>,
    fail_on: Option<PathBuf>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend a directory already exists, without recording an operation
    pub fn with_directory(self, path: impl Into<PathBuf>) -> Self {
        self.directories.borrow_mut().insert(path.into());
        self
    }

    /// Make any write or create at `path` fail
    pub fn failing_on(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_on = Some(path.into());
        self
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.borrow().get(path).cloned()
    }

    /// Paths of all written files, sorted
    pub fn file_paths(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }

    pub fn operations(&self) -> Vec<StorageOp> {
        self.operations.borrow().clone()
    }

    fn check_failure(&self, path: &Path) -> io::Result<()> {
        match &self.fail_on {
            Some(failing) if failing == path => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("simulated failure at {}", path.display()),
            )),
            _ => Ok(()),
        }
    }
}

impl Storage for MemoryStorage {
    fn exists(&self, path: &Path) -> bool {
        self.directories
            .borrow()
            .iter()
            .chain(self.files.borrow().keys())
            .any(|p| p.starts_with(path))
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check_failure(path)?;
        let mut directories = self.directories.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            directories.insert(ancestor.to_path_buf());
        }
        self.operations
            .borrow_mut()
            .push(StorageOp::CreateDir(path.to_path_buf()));
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_failure(path)?;
        let parent_exists = path
            .parent()
            .map_or(true, |p| p.as_os_str().is_empty() || self.directories.borrow().contains(p));
        if !parent_exists {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory of {} does not exist", path.display()),
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_string());
        self.operations
            .borrow_mut()
            .push(StorageOp::Write(path.to_path_buf()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_write_requires_parent() {
        let storage = MemoryStorage::new();
        let err = storage.write(Path::new("app/src/index.js"), "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);

        storage.create_dir_all(Path::new("app/src")).unwrap();
        storage.write(Path::new("app/src/index.js"), "x").unwrap();
        assert_eq!(storage.file(Path::new("app/src/index.js")).as_deref(), Some("x"));
        assert!(storage.exists(Path::new("app")));
    }

    #[test]
    fn test_memory_seeded_directory_exists() {
        let storage = MemoryStorage::new().with_directory("taken");
        assert!(storage.exists(Path::new("taken")));
        assert!(!storage.exists(Path::new("free")));
        assert!(storage.operations().is_empty());
    }

    #[test]
    fn test_memory_failure_injection() {
        let storage = MemoryStorage::new().failing_on("out/src");
        assert!(storage.create_dir_all(Path::new("out/src")).is_err());
        assert!(storage.create_dir_all(Path::new("out/other")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_local_storage_sees_dangling_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let link = dir.path().join("demo");
        std::os::unix::fs::symlink(dir.path().join("missing"), &link).unwrap();
        assert!(LocalStorage.exists(&link));
    }

    #[test]
    fn test_local_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        LocalStorage.create_dir_all(&nested).unwrap();
        LocalStorage.write(&nested.join("f.txt"), "hello").unwrap();
        assert!(LocalStorage.exists(&nested.join("f.txt")));
        assert_eq!(std::fs::read_to_string(nested.join("f.txt")).unwrap(), "hello");
    }
}
