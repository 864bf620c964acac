use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)(\.(\d+))?(-(dev|alpha|beta|rc\d*))?$")
        .expect("version pattern is a valid regex")
});

/// Stability value that renders without a suffix
const STABLE: &str = "stable";

/// Structured version record
///
/// Either fully empty (the input did not parse) or carrying all three
/// numeric components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: Option<u64>,
    pub minor: Option<u64>,
    pub patch: Option<u64>,
    pub stability: Option<String>,
}

impl VersionInfo {
    /// Create a stable version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionInfo {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            stability: None,
        }
    }

    /// Attach a stability tag (e.g. "beta", "rc2")
    pub fn with_stability(mut self, stability: impl Into<String>) -> Self {
        self.stability = Some(stability.into());
        self
    }

    /// Parse a version string, returning the empty record when it does not match
    pub fn parse(version: &str) -> Self {
        parse_version_string(version)
    }

    /// True when the record came from a failed parse
    pub fn is_empty(&self) -> bool {
        self.major.is_none()
            && self.minor.is_none()
            && self.patch.is_none()
            && self.stability.is_none()
    }

    pub fn bump_major(&mut self) {
        self.major = Some(increment(self.major));
    }

    pub fn bump_minor(&mut self) {
        self.minor = Some(increment(self.minor));
    }

    pub fn bump_patch(&mut self) {
        self.patch = Some(increment(self.patch));
    }

    /// Apply a single bump.
    ///
    /// Lower-order components are kept as they are unless `reset_lower` is
    /// set, in which case they drop to zero the way semver expects.
    pub fn apply(&mut self, bump: VersionBump, reset_lower: bool) {
        match bump {
            VersionBump::Major => {
                self.bump_major();
                if reset_lower {
                    self.minor = Some(0);
                    self.patch = Some(0);
                }
            }
            VersionBump::Minor => {
                self.bump_minor();
                if reset_lower {
                    self.patch = Some(0);
                }
            }
            VersionBump::Patch => self.bump_patch(),
        }
    }
}

fn increment(component: Option<u64>) -> u64 {
    component.unwrap_or(0).saturating_add(1)
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.major.unwrap_or(0),
            self.minor.unwrap_or(0),
            self.patch.unwrap_or(0)
        )?;
        match self.stability.as_deref() {
            Some(stability) if !stability.is_empty() && stability != STABLE => {
                write!(f, "-{}", stability)
            }
            _ => Ok(()),
        }
    }
}

/// Parses `X.Y[.Z][-stability]` into a [`VersionInfo`].
///
/// Anything that does not match, including the empty string, yields the
/// empty record rather than an error. Missing patch defaults to 0.
///
/// # Example
/// ```
/// use bump_version::domain::version::{parse_version_string, VersionInfo};
///
/// assert_eq!(parse_version_string("2.0-rc2"), VersionInfo::new(2, 0, 0).with_stability("rc2"));
/// assert!(parse_version_string("not-a-version").is_empty());
/// ```
pub fn parse_version_string(version: &str) -> VersionInfo {
    let Some(caps) = VERSION_PATTERN.captures(version) else {
        return VersionInfo::default();
    };

    let number = |index: usize| -> Option<Option<u64>> {
        match caps.get(index) {
            Some(m) => m.as_str().parse::<u64>().ok().map(Some),
            None => Some(None),
        }
    };

    // A component too large for u64 is treated like any other mismatch
    let (Some(Some(major)), Some(minor), Some(patch)) = (number(1), number(2), number(4)) else {
        return VersionInfo::default();
    };

    VersionInfo {
        major: Some(major),
        minor: Some(minor.unwrap_or(0)),
        patch: Some(patch.unwrap_or(0)),
        stability: caps.get(6).map(|m| m.as_str().to_string()),
    }
}

/// Renders a [`VersionInfo`] as `major.minor.patch[-stability]`.
pub fn create_version_string(info: &VersionInfo) -> String {
    info.to_string()
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl VersionBump {
    /// Pick the bump from the three mutually exclusive command flags.
    /// Patch wins when nothing is selected.
    pub fn from_flags(major: bool, minor: bool, patch: bool) -> Self {
        if major {
            VersionBump::Major
        } else if minor {
            VersionBump::Minor
        } else if patch {
            VersionBump::Patch
        } else {
            VersionBump::default()
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}
