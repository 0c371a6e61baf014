//! Command-line interface module for filetidy.
//!
//! This module handles argument parsing, root validation and the top-level
//! run that drives the walker.

use crate::file_organizer::OrganizeError;
use crate::output::OutputFormatter;
use crate::walker::{RunReport, process_directory};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Rename files to a canonical lowercase/underscore form and optionally sort
/// them into folders by extension.
#[derive(Debug, Parser)]
#[command(name = "filetidy", version, about)]
pub struct Cli {
    /// The root directory to traverse and organize.
    pub target_directory: PathBuf,

    /// Move files into subdirectories based on their extension (e.g. .jpg into Images).
    #[arg(short, long)]
    pub organize: bool,

    /// Print a per-category table of moved files when done.
    #[arg(long)]
    pub summary: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}

/// Resolves a user-supplied path against the current directory without
/// following symlinks.
pub fn resolve_root(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Runs the tool for parsed arguments.
///
/// Returns the run report, or [`OrganizeError::InvalidBasePath`] when the
/// resolved target is not a directory. Nothing on disk is touched in that
/// case.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use filetidy::cli::{Cli, run_cli};
///
/// let cli = Cli::parse_from(["filetidy", "/path/to/directory", "--organize"]);
/// match run_cli(&cli) {
///     Ok(report) => println!("{} files moved", report.moved),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(cli: &Cli) -> Result<RunReport, OrganizeError> {
    if cli.no_color {
        OutputFormatter::set_color(false);
    }

    let root = resolve_root(&cli.target_directory);
    if !root.is_dir() {
        return Err(OrganizeError::InvalidBasePath { path: root });
    }

    let report = process_directory(&root, cli.organize)?;

    if cli.summary {
        OutputFormatter::summary_table(&report.category_counts, report.moved);
        OutputFormatter::skipped_summary(report.hidden_skipped, report.other_skipped);
    }
    if report.has_errors() {
        OutputFormatter::warning(&format!(
            "{} operation(s) failed. Please review errors above.",
            report.errors.len()
        ));
    }
    OutputFormatter::complete();

    Ok(report)
}
