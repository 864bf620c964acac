//! Domain logic - pure version rules independent of file access

pub mod markers;
pub mod version;

pub use markers::{extract_version, replace_version_markers};
pub use version::{create_version_string, parse_version_string, VersionBump, VersionInfo};
