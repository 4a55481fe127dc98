use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use mojifix::locate::DEFAULT_GLOBS;
use mojifix::Mojifix;

#[derive(Parser)]
#[command(name = "mojifix")]
#[command(about = "Repair mojibake in text assets and re-encode them as UTF-8", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Specific files to process; skips glob discovery entirely
    pub paths: Vec<PathBuf>,

    /// Report files that would be updated without writing changes
    #[arg(long)]
    pub dry_run: bool,

    /// Glob pattern to match instead of the default set (repeatable)
    #[arg(long = "glob", value_name = "PATTERN")]
    pub globs: Vec<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        paths,
        dry_run,
        globs,
    } = cli;

    let root = env::current_dir().context("Failed to resolve the working directory")?;
    let fixer = Mojifix::new(&root);

    let targets = if paths.is_empty() {
        let patterns: Vec<String> = if globs.is_empty() {
            DEFAULT_GLOBS.iter().map(|p| (*p).to_string()).collect()
        } else {
            globs
        };
        fixer.discover(&patterns)?
    } else {
        paths
    };
    debug!(targets = targets.len(), dry_run, "resolved target list");

    let changed = fixer.run(&targets, dry_run)?;
    print_report(&changed, dry_run);
    Ok(())
}

fn print_report(changed: &[PathBuf], dry_run: bool) {
    if changed.is_empty() {
        if dry_run {
            println!("{}", "No files need updates.".bright_green());
        } else {
            println!("{}", "No changes required.".bright_green());
        }
        return;
    }

    if dry_run {
        println!("{}", "Would update:".bright_yellow().bold());
    } else {
        println!("{}", "Updated:".bright_green().bold());
    }
    for path in changed {
        println!("  {}", path.display());
    }
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!(
        "\n{} {}",
        "✗".bright_red().bold(),
        "Run failed".bright_red().bold()
    );
    eprintln!("  {} {}", "├".bright_black(), err);

    // Display error chain
    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    // Add helpful context based on error type
    let error_str = err.to_string();
    if error_str.contains("Permission denied") {
        eprintln!(
            "  {} Check write access to the target files",
            "└".bright_cyan()
        );
    } else if error_str.contains("No such file") {
        eprintln!(
            "  {} Check that the file path is correct",
            "└".bright_cyan()
        );
    } else {
        eprintln!(
            "  {} Set {} for a trace of the run",
            "└".bright_black(),
            "RUST_LOG=debug".bright_cyan()
        );
    }
}
