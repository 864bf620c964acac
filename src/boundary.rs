use std::fmt;
use std::path::PathBuf;

use crate::bumper::VersionSource;

/// Non-fatal issues met while resolving or writing versions.
/// The run carries on; these are reported to the user afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// None of the configured files nor the manifests held a version
    NoVersionSource,
    /// A version was found but does not follow `X.Y[.Z][-stability]`
    UnparsableVersion {
        version: String,
        source: VersionSource,
    },
    /// A configured source file could not be read while resolving
    UnreadableSource { path: PathBuf, reason: String },
    /// A manifest exists but could not be parsed
    MalformedManifest { path: PathBuf, reason: String },
    /// Writing the new version into a file failed
    UpdateFailed { path: PathBuf, reason: String },
}

impl BumpWarning {
    /// Whether this warning means a file was left at the old version
    pub fn is_update_failure(&self) -> bool {
        matches!(self, BumpWarning::UpdateFailed { .. })
    }
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::NoVersionSource => {
                write!(f, "No version found in configured files, composer.json or package.ini")
            }
            BumpWarning::UnparsableVersion { version, source } => {
                write!(f, "Cannot parse version '{}' from {}", version, source)
            }
            BumpWarning::UnreadableSource { path, reason } => {
                write!(f, "Cannot read version source '{}': {}", path.display(), reason)
            }
            BumpWarning::MalformedManifest { path, reason } => {
                write!(f, "Ignoring malformed '{}': {}", path.display(), reason)
            }
            BumpWarning::UpdateFailed { path, reason } => {
                write!(f, "Version update failed: {} ({})", path.display(), reason)
            }
        }
    }
}
