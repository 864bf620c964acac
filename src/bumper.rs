//! Version resolution and multi-file synchronization

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::boundary::BumpWarning;
use crate::config::{BehaviorConfig, Config};
use crate::domain::{extract_version, replace_version_markers, VersionBump, VersionInfo};
use crate::error::{BumpError, Result};
use crate::manifest::{composer, ini, WriteOutcome, COMPOSER_JSON, PACKAGE_INI};
use crate::store::FileStore;

/// Where the current version was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    SourceFile(PathBuf),
    ComposerJson,
    PackageIni,
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSource::SourceFile(path) => write!(f, "{}", path.display()),
            VersionSource::ComposerJson => f.write_str(COMPOSER_JSON),
            VersionSource::PackageIni => f.write_str(PACKAGE_INI),
        }
    }
}

/// A version string together with the source it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    pub version: String,
    pub source: VersionSource,
}

/// Result of a bump run.
///
/// `version` is the value downstream release steps should pick up.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub previous: Option<ResolvedVersion>,
    pub bump: VersionBump,
    pub version: String,
    /// Files touched by the run; empty when nothing was written
    pub files: Vec<(PathBuf, WriteOutcome)>,
    pub warnings: Vec<BumpWarning>,
}

impl BumpOutcome {
    /// The version string the run started from, if any source held one
    pub fn previous_version(&self) -> Option<&str> {
        self.previous.as_ref().map(|p| p.version.as_str())
    }

    /// Files whose update failed
    pub fn failed_files(&self) -> impl Iterator<Item = &Path> {
        self.warnings.iter().filter_map(|w| match w {
            BumpWarning::UpdateFailed { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }
}

/// Bumps the project version and writes it back everywhere it lives.
///
/// Relative paths, including the configured source files, are resolved
/// against `root`. `composer.json` and `package.ini` are looked up directly
/// under `root`.
pub struct VersionBumper<S: FileStore> {
    store: S,
    root: PathBuf,
    files: Vec<PathBuf>,
    behavior: BehaviorConfig,
}

impl<S: FileStore> VersionBumper<S> {
    pub fn new(store: S, root: impl Into<PathBuf>) -> Self {
        VersionBumper {
            store,
            root: root.into(),
            files: Vec::new(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Build a bumper from the `VersionFrom` list and behavior settings
    pub fn from_config(store: S, root: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(store, root)
            .with_files(&config.version_from)
            .with_behavior(config.behavior)
    }

    /// Set the ordered list of source files holding the version
    pub fn with_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.files = files.into_iter().map(|p| p.as_ref().to_path_buf()).collect();
        self
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn path(&self, file: impl AsRef<Path>) -> PathBuf {
        self.root.join(file)
    }

    /// Finds the current version string.
    ///
    /// Configured source files are tried in order, then `composer.json`,
    /// then the `[package]` section of `package.ini`. The first hit wins.
    pub fn resolve_current_version(&self) -> Option<ResolvedVersion> {
        self.resolve(&mut Vec::new())
    }

    fn resolve(&self, warnings: &mut Vec<BumpWarning>) -> Option<ResolvedVersion> {
        for file in &self.files {
            match self.read_version_from_source_file(file) {
                Ok(Some(version)) => {
                    return Some(ResolvedVersion {
                        version,
                        source: VersionSource::SourceFile(file.clone()),
                    });
                }
                Ok(None) => debug!("No version marker in {}", file.display()),
                Err(e) => {
                    warn!("Cannot read {}: {}", file.display(), e);
                    warnings.push(BumpWarning::UnreadableSource {
                        path: file.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        match self.read_version_from_composer_json() {
            Ok(Some(version)) => {
                return Some(ResolvedVersion {
                    version,
                    source: VersionSource::ComposerJson,
                });
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Ignoring {}: {}", COMPOSER_JSON, e);
                warnings.push(BumpWarning::MalformedManifest {
                    path: PathBuf::from(COMPOSER_JSON),
                    reason: e.to_string(),
                });
            }
        }

        match self.read_version_from_package_ini() {
            Ok(Some(version)) => Some(ResolvedVersion {
                version,
                source: VersionSource::PackageIni,
            }),
            Ok(None) => None,
            Err(e) => {
                warn!("Ignoring {}: {}", PACKAGE_INI, e);
                warnings.push(BumpWarning::MalformedManifest {
                    path: PathBuf::from(PACKAGE_INI),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    /// Reads the version marker from one source file
    pub fn read_version_from_source_file(&self, file: impl AsRef<Path>) -> Result<Option<String>> {
        let content = self.store.read_to_string(&self.path(file))?;
        Ok(extract_version(&content).map(str::to_string))
    }

    /// Reads `version` from `composer.json`; `Ok(None)` when the file is absent
    pub fn read_version_from_composer_json(&self) -> Result<Option<String>> {
        let path = self.path(COMPOSER_JSON);
        if !self.store.exists(&path) {
            return Ok(None);
        }
        debug!("Reading version info from {}", COMPOSER_JSON);
        composer::read_version(&self.store.read_to_string(&path)?)
    }

    /// Reads `[package] version` from `package.ini`; `Ok(None)` when the file is absent
    pub fn read_version_from_package_ini(&self) -> Result<Option<String>> {
        let path = self.path(PACKAGE_INI);
        if !self.store.exists(&path) {
            return Ok(None);
        }
        debug!("Reading version info from {}", PACKAGE_INI);
        Ok(ini::read_version(&self.store.read_to_string(&path)?))
    }

    /// Rewrites every version marker in a source file.
    ///
    /// The file is written back even when it holds no marker.
    pub fn replace_version_in_source_file(
        &self,
        file: impl AsRef<Path>,
        new_version: &str,
    ) -> Result<WriteOutcome> {
        let path = self.path(file);
        let content = self.store.read_to_string(&path)?;
        let updated = replace_version_markers(&content, new_version);
        self.store.write(&path, &updated)?;

        Ok(if updated == content {
            WriteOutcome::Unchanged
        } else {
            WriteOutcome::Updated
        })
    }

    /// Updates the `version = ...` line of `package.ini`
    pub fn write_version_to_package_ini(&self, new_version: &str) -> Result<WriteOutcome> {
        let path = self.path(PACKAGE_INI);
        if !self.store.exists(&path) {
            return Ok(WriteOutcome::Missing);
        }
        debug!("Writing version info to {}", PACKAGE_INI);
        let content = self.store.read_to_string(&path)?;
        match ini::set_version(&content, new_version) {
            Some(updated) => {
                self.store.write(&path, &updated)?;
                Ok(WriteOutcome::Updated)
            }
            None => Ok(WriteOutcome::Unchanged),
        }
    }

    /// Sets `version` in `composer.json`
    pub fn write_version_to_composer_json(&self, new_version: &str) -> Result<WriteOutcome> {
        let path = self.path(COMPOSER_JSON);
        if !self.store.exists(&path) {
            return Ok(WriteOutcome::Missing);
        }
        debug!("Writing version info to {}", COMPOSER_JSON);
        let content = self.store.read_to_string(&path)?;
        let updated = composer::set_version(&content, new_version)?;
        if updated == content {
            return Ok(WriteOutcome::Unchanged);
        }
        self.store.write(&path, &updated)?;
        Ok(WriteOutcome::Updated)
    }

    /// Resolves, parses and bumps without writing anything
    pub fn plan(&self, bump: VersionBump) -> Result<BumpOutcome> {
        let mut warnings = Vec::new();
        let previous = self.resolve(&mut warnings);

        let mut info = match &previous {
            Some(resolved) => {
                let info = VersionInfo::parse(&resolved.version);
                if info.is_empty() {
                    if self.behavior.require_version_source {
                        return Err(BumpError::version(format!(
                            "'{}' from {} is not a valid version",
                            resolved.version, resolved.source
                        )));
                    }
                    warn!("Cannot parse version '{}' from {}", resolved.version, resolved.source);
                    warnings.push(BumpWarning::UnparsableVersion {
                        version: resolved.version.clone(),
                        source: resolved.source.clone(),
                    });
                }
                info
            }
            None => {
                if self.behavior.require_version_source {
                    return Err(BumpError::NoVersionSource);
                }
                warn!("No version source found, bumping from 0.0.0");
                warnings.push(BumpWarning::NoVersionSource);
                VersionInfo::default()
            }
        };

        info.apply(bump, self.behavior.reset_lower);

        Ok(BumpOutcome {
            previous,
            bump,
            version: info.to_string(),
            files: Vec::new(),
            warnings,
        })
    }

    /// Bumps the version and writes it to every source file and manifest.
    ///
    /// A file that cannot be updated is logged and recorded as a warning;
    /// the remaining files are still processed.
    pub fn run(&self, bump: VersionBump) -> Result<BumpOutcome> {
        let mut outcome = self.plan(bump)?;
        info!(
            "Version bump from {} to {}",
            outcome.previous_version().unwrap_or("(none)"),
            outcome.version
        );

        let new_version = outcome.version.clone();
        for file in &self.files {
            let result = self.replace_version_in_source_file(file, &new_version);
            record(&mut outcome, file.clone(), result);
        }

        let result = self.write_version_to_package_ini(&new_version);
        record(&mut outcome, PathBuf::from(PACKAGE_INI), result);

        let result = self.write_version_to_composer_json(&new_version);
        record(&mut outcome, PathBuf::from(COMPOSER_JSON), result);

        Ok(outcome)
    }
}

fn record(outcome: &mut BumpOutcome, path: PathBuf, result: Result<WriteOutcome>) {
    match result {
        Ok(WriteOutcome::Missing) => {}
        Ok(written) => {
            debug!("{}: {}", path.display(), written);
            outcome.files.push((path, written));
        }
        Err(e) => {
            error!("Version update failed: {}: {}", path.display(), e);
            outcome.warnings.push(BumpWarning::UpdateFailed {
                path,
                reason: e.to_string(),
            });
        }
    }
}
