//! Output formatting and styling module.
//!
//! Every line the tool prints goes through [`OutputFormatter`], so the log
//! format and colors can be changed in one place. Per-file results are plain
//! lines interleaved in traversal order; failures go to stderr.

use crate::file_organizer::OrganizeError;
use colored::*;
use std::collections::BTreeMap;

/// Manages all CLI output with consistent styling and formatting.
pub struct OutputFormatter;

impl OutputFormatter {
    /// Turns colored output on or off for the rest of the process.
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Prints the line announcing the resolved traversal root.
    pub fn start(root: &str) {
        println!("Starting process in: {}", root.bold());
    }

    /// Prints a rename record.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filetidy::output::OutputFormatter;
    /// OutputFormatter::renamed("My File.txt", "my_file.txt");
    /// ```
    pub fn renamed(old_name: &str, new_name: &str) {
        println!(
            "   {}: '{}' -> '{}'",
            "RENAMED".green(),
            old_name,
            new_name
        );
    }

    /// Prints a move record.
    pub fn moved(name: &str, category: &str) {
        println!(
            "   {}: '{}' to folder '{}'",
            "MOVED".cyan(),
            name,
            category
        );
    }

    /// Prints a per-file or per-directory failure.
    pub fn error(err: &OrganizeError) {
        let action = match err {
            OrganizeError::RenameFailed { .. } => "renaming",
            OrganizeError::FileMoveFailure { .. } => "moving",
            OrganizeError::DirectoryCreationFailed { .. } => "creating folder for",
            OrganizeError::DirectoryUnreadable { .. } => "reading",
            OrganizeError::InvalidBasePath { .. } => "opening",
        };
        let name = err
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| err.path().display().to_string());
        eprintln!("   {} {} {}: {}", "ERROR".red().bold(), action, name, err);
    }

    /// Prints a fatal error message.
    pub fn fatal(message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Prints a warning message in yellow.
    pub fn warning(message: &str) {
        println!("   {} {}", "WARNING".yellow(), message);
    }

    /// Prints the completion line.
    pub fn complete() {
        println!("\n{}", "Processing complete!".bold());
    }

    /// Prints a section header.
    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    /// Prints a summary table of moved files by category.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use filetidy::output::OutputFormatter;
    /// use std::collections::BTreeMap;
    ///
    /// let mut counts = BTreeMap::new();
    /// counts.insert("Documents".to_string(), 15);
    /// counts.insert("Images".to_string(), 8);
    /// OutputFormatter::summary_table(&counts, 23);
    /// ```
    pub fn summary_table(category_counts: &BTreeMap<String, usize>, total_files: usize) {
        Self::header("SUMMARY");

        let max_category_len = category_counts
            .keys()
            .map(|name| name.len())
            .max()
            .unwrap_or(0)
            .max(8); // At least "Category" width

        println!(
            "{:<width$} | {}",
            "Category".bold(),
            "Files".bold(),
            width = max_category_len
        );
        println!("{}", "-".repeat(max_category_len + 10));

        for (category, count) in category_counts {
            println!(
                "{:<width$} | {} {}",
                category,
                count.to_string().green(),
                plural(*count),
                width = max_category_len
            );
        }

        println!("{}", "-".repeat(max_category_len + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total_files.to_string().green().bold(),
            plural(total_files),
            width = max_category_len
        );
    }

    /// Prints how many files were left alone without being examined.
    pub fn skipped_summary(hidden: usize, unprocessable: usize) {
        println!("Skipped (hidden): {}", hidden);
        println!("Skipped (name not valid UTF-8): {}", unprocessable);
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(1), "file");
        assert_eq!(plural(0), "files");
        assert_eq!(plural(3), "files");
    }
}
