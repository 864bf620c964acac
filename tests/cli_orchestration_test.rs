use bump_version::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs};
use bump_version::config::Config;
use bump_version::domain::VersionBump;
use bump_version::BumpError;
use std::fs;

#[test]
fn test_workflow_args_defaults() {
    let args = BumpWorkflowArgs::default();

    assert_eq!(args.bump, VersionBump::Patch);
    assert_eq!(args.version_from, None);
    assert!(!args.reset_lower);
    assert!(!args.strict);
    assert!(!args.dry_run);
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let composer = r#"{"name": "acme/kernel", "version": "1.4.2"}"#;
    fs::write(dir.path().join("composer.json"), composer).unwrap();

    let args = BumpWorkflowArgs {
        root: dir.path().to_path_buf(),
        bump: VersionBump::Minor,
        dry_run: true,
        ..BumpWorkflowArgs::default()
    };
    let outcome = run_bump_workflow(&args, Config::default()).unwrap();

    assert_eq!(outcome.previous_version(), Some("1.4.2"));
    assert_eq!(outcome.version, "1.5.2");
    assert!(outcome.files.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("composer.json")).unwrap(),
        composer
    );
}

#[test]
fn test_version_from_override_is_used() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/App.php"), "/** @version 0.9.0 */").unwrap();

    let config = Config {
        version_from: vec!["src/Ignored.php".to_string()],
        ..Config::default()
    };
    let args = BumpWorkflowArgs {
        root: dir.path().to_path_buf(),
        version_from: Some("src/App.php".to_string()),
        ..BumpWorkflowArgs::default()
    };
    let outcome = run_bump_workflow(&args, config).unwrap();

    assert_eq!(outcome.version, "0.9.1");
    assert_eq!(
        fs::read_to_string(dir.path().join("src/App.php")).unwrap(),
        "/** @VERSION 0.9.1 */"
    );
}

#[test]
fn test_strict_fails_on_empty_project() {
    let dir = tempfile::tempdir().unwrap();
    let args = BumpWorkflowArgs {
        root: dir.path().to_path_buf(),
        strict: true,
        ..BumpWorkflowArgs::default()
    };

    let result = run_bump_workflow(&args, Config::default());
    assert!(matches!(result, Err(BumpError::NoVersionSource)));
}

#[test]
fn test_reset_lower_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.ini"), "[package]\nversion = 1.2.3\n").unwrap();

    let args = BumpWorkflowArgs {
        root: dir.path().to_path_buf(),
        bump: VersionBump::Major,
        reset_lower: true,
        ..BumpWorkflowArgs::default()
    };
    let outcome = run_bump_workflow(&args, Config::default()).unwrap();

    assert_eq!(outcome.version, "2.0.0");
    assert_eq!(
        fs::read_to_string(dir.path().join("package.ini")).unwrap(),
        "[package]\nversion = 2.0.0\n"
    );
}
