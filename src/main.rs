use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bump_version::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs};
use bump_version::config;
use bump_version::domain::VersionBump;
use bump_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    about = "Bump the version held in source files, composer.json and package.ini"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        default_value = ".",
        help = "Project directory holding composer.json and package.ini"
    )]
    root: PathBuf,

    #[arg(
        long,
        value_name = "FILES",
        help = "Comma-separated source files holding the version (overrides VersionFrom)"
    )]
    version_from: Option<String>,

    #[arg(long, group = "bump", help = "bump major (X) version.")]
    bump_major: bool,

    #[arg(long, group = "bump", help = "bump minor (Y) version.")]
    bump_minor: bool,

    #[arg(long, group = "bump", help = "bump patch (Z) version, this is the default.")]
    bump_patch: bool,

    #[arg(long, help = "Reset lower components to 0 when bumping a higher one")]
    reset_lower: bool,

    #[arg(long, help = "Fail when no valid version can be found")]
    strict: bool,

    #[arg(long, help = "Preview the new version without writing any file")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        root: args.root,
        version_from: args.version_from,
        bump: VersionBump::from_flags(args.bump_major, args.bump_minor, args.bump_patch),
        reset_lower: args.reset_lower,
        strict: args.strict,
        dry_run: args.dry_run,
    };

    let outcome = match run_bump_workflow(&workflow_args, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    ui::display_outcome(&outcome, workflow_args.dry_run);

    // Last line on stdout is the new version, for pipelines to capture
    println!("{}", outcome.version);
    Ok(())
}
