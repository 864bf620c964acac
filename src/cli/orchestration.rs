//! Main workflow orchestration logic
//!
//! Separates CLI argument parsing from the bump itself so the workflow can be
//! driven programmatically without depending on clap.

use std::path::PathBuf;

use tracing::debug;

use crate::bumper::{BumpOutcome, VersionBumper};
use crate::config::{split_file_list, Config};
use crate::domain::VersionBump;
use crate::error::Result;
use crate::store::FsStore;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args in a form suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Directory holding composer.json, package.ini and the source files
    pub root: PathBuf,

    /// Comma-separated source files, replacing `VersionFrom` from the config
    pub version_from: Option<String>,

    pub bump: VersionBump,

    /// Force resetting lower-order components
    pub reset_lower: bool,

    /// Fail when no usable version is found
    pub strict: bool,

    /// Resolve and report without writing any file
    pub dry_run: bool,
}

/// Folds command-line overrides into the loaded configuration
pub fn apply_overrides(mut config: Config, args: &BumpWorkflowArgs) -> Config {
    if let Some(files) = &args.version_from {
        config.version_from = split_file_list(files);
    }
    config.behavior.reset_lower |= args.reset_lower;
    config.behavior.require_version_source |= args.strict;
    config
}

/// Main bump workflow
///
/// 1. Merge command-line overrides into the configuration
/// 2. Resolve the current version and compute the bumped one
/// 3. Unless this is a dry run, write it to every source file and manifest
///
/// The returned outcome carries the new version for later release steps.
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: Config) -> Result<BumpOutcome> {
    let config = apply_overrides(config, args);
    debug!(
        "Bumping {} in {} (sources: {:?})",
        args.bump,
        args.root.display(),
        config.version_from
    );

    let bumper = VersionBumper::from_config(FsStore::new(), args.root.clone(), &config);
    if args.dry_run {
        bumper.plan(args.bump)
    } else {
        bumper.run(args.bump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_version_from() {
        let config = Config {
            version_from: vec!["src/Old.php".to_string()],
            ..Config::default()
        };
        let args = BumpWorkflowArgs {
            version_from: Some("src/A.php, src/B.php".to_string()),
            ..BumpWorkflowArgs::default()
        };

        let merged = apply_overrides(config, &args);
        assert_eq!(merged.version_from, vec!["src/A.php", "src/B.php"]);
    }

    #[test]
    fn test_overrides_keep_config_when_absent() {
        let mut config = Config {
            version_from: vec!["src/Kernel.php".to_string()],
            ..Config::default()
        };
        config.behavior.reset_lower = true;

        let merged = apply_overrides(config.clone(), &BumpWorkflowArgs::default());
        assert_eq!(merged, config);
    }

    #[test]
    fn test_overrides_enable_flags() {
        let args = BumpWorkflowArgs {
            reset_lower: true,
            strict: true,
            ..BumpWorkflowArgs::default()
        };

        let merged = apply_overrides(Config::default(), &args);
        assert!(merged.behavior.reset_lower);
        assert!(merged.behavior.require_version_source);
    }
}
