use crate::boundary::BumpWarning;
use crate::bumper::BumpOutcome;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

pub fn display_success(message: &str) {
    println!("\x1b[32m✓\x1b[0m {}", message); // Green color
}

pub fn display_status(message: &str) {
    println!("\x1b[33m→\x1b[0m {}", message); // Yellow color
}

pub fn display_warning(warning: &BumpWarning) {
    eprintln!("\x1b[33mWARNING:\x1b[0m {}", warning);
}

pub fn display_version_change(old_version: Option<&str>, new_version: &str) {
    match old_version {
        Some(old) => {
            println!("\n\x1b[1mVersion Change:\x1b[0m");
            println!("  From: \x1b[31m{}\x1b[0m", old);
            println!("  To:   \x1b[32m{}\x1b[0m", new_version);
        }
        None => {
            println!("\n\x1b[1mInitial Version:\x1b[0m");
            println!("  New version: \x1b[32m{}\x1b[0m", new_version);
        }
    }
}

/// Print what a run did: the version change, touched files and warnings
pub fn display_outcome(outcome: &BumpOutcome, dry_run: bool) {
    display_version_change(outcome.previous_version(), &outcome.version);
    if let Some(previous) = &outcome.previous {
        display_status(&format!("Current version read from {}", previous.source));
    }

    for warning in &outcome.warnings {
        display_warning(warning);
    }

    if dry_run {
        display_status("Dry run: no files were written");
        return;
    }

    for (path, written) in &outcome.files {
        display_success(&format!("{} ({})", path.display(), written));
    }
}
