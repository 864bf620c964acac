//! Well-known package metadata files kept in sync with the bumped version

pub mod composer;
pub mod ini;

use std::fmt;

/// JSON package manifest at the project root
pub const COMPOSER_JSON: &str = "composer.json";

/// INI package descriptor at the project root
pub const PACKAGE_INI: &str = "package.ini";

/// What happened when a manifest was brought up to date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// New content was written
    Updated,
    /// The file exists but already matched; nothing written
    Unchanged,
    /// The file does not exist
    Missing,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
            WriteOutcome::Missing => "missing",
        };
        f.write_str(label)
    }
}
