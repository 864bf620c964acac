//! File access abstraction layer
//!
//! Every read and write the bumper performs goes through the [FileStore]
//! trait so the whole run can be exercised against an in-memory tree.
//!
//! - [fs::FsStore]: the real filesystem
//! - [memory::MemoryStore]: an in-memory store for tests
//!
//! Files are always read and written whole; no handle outlives a call.

pub mod fs;
pub mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

use crate::error::Result;
use std::path::Path;

/// Whole-file read/write operations needed by the bumper
///
/// ## Error Handling
///
/// Reads surface [crate::error::BumpError::Io]. Writes surface
/// [crate::error::BumpError::Write] carrying the path that failed, so the
/// caller can report it without extra context.
pub trait FileStore: Send + Sync {
    /// Whether a file exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Read the full content of `path` as UTF-8
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Replace the full content of `path`
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}
