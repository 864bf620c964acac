use crate::error::{BumpError, Result};
use crate::store::FileStore;
use std::path::Path;

/// [FileStore] backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    pub fn new() -> Self {
        FsStore
    }
}

impl FileStore for FsStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content).map_err(|e| BumpError::write(path, e.to_string()))
    }
}
