use crate::error::{BumpError, Result};
use crate::store::FileStore;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// In-memory [FileStore] for testing without a real directory
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
    read_only: HashSet<PathBuf>,
    writes: Mutex<Vec<PathBuf>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files_mut().insert(path.into(), content.into());
    }

    /// Make every write to `path` fail
    pub fn set_read_only(&mut self, path: impl Into<PathBuf>) {
        self.read_only.insert(path.into());
    }

    /// Current content of `path`, if any
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock_files().get(path.as_ref()).cloned()
    }

    /// Paths written so far, in order
    pub fn writes(&self) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn lock_files(&self) -> MutexGuard<'_, HashMap<PathBuf, String>> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn files_mut(&mut self) -> &mut HashMap<PathBuf, String> {
        self.files
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.lock_files().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.lock_files().get(path).cloned().ok_or_else(|| {
            BumpError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            ))
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        if self.read_only.contains(path) {
            return Err(BumpError::write(path, "permission denied"));
        }
        self.lock_files()
            .insert(path.to_path_buf(), content.to_string());
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic() {
        let store = MemoryStore::new().with_file("composer.json", "{}");

        assert!(store.exists(Path::new("composer.json")));
        assert!(!store.exists(Path::new("package.ini")));
        assert_eq!(store.read_to_string(Path::new("composer.json")).unwrap(), "{}");
    }

    #[test]
    fn test_memory_store_write_records_path() {
        let store = MemoryStore::new();
        store.write(Path::new("a.php"), "x").unwrap();

        assert_eq!(store.contents("a.php").as_deref(), Some("x"));
        assert_eq!(store.writes(), vec![PathBuf::from("a.php")]);
    }

    #[test]
    fn test_memory_store_read_only() {
        let mut store = MemoryStore::new().with_file("locked.php", "old");
        store.set_read_only("locked.php");

        let err = store.write(Path::new("locked.php"), "new").unwrap_err();
        assert!(matches!(err, BumpError::Write { .. }));
        assert_eq!(store.contents("locked.php").as_deref(), Some("old"));
        assert!(store.writes().is_empty());
    }

    #[test]
    fn test_memory_store_missing_file() {
        let err = MemoryStore::default()
            .read_to_string(Path::new("missing"))
            .unwrap_err();
        assert!(matches!(err, BumpError::Io(_)));
    }
}
