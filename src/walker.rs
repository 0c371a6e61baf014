//! Recursive traversal that renames and optionally organizes files.
//!
//! The walk is depth-first and pre-order, with the entries of each directory
//! visited in file-name order. A directory is listed in full when the walk
//! enters it, so category folders created under an already-listed directory
//! are not revisited during the same run.

use crate::file_category::Category;
use crate::file_name::{FilenameParts, is_hidden};
use crate::file_organizer::{FileOrganizer, OrganizeError, OrganizeResult};
use crate::output::OutputFormatter;
use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Tally of one traversal.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Visible file entries visited. A file moved into a category folder that
    /// the walk reaches later is visited, and counted, a second time.
    pub files_visited: usize,
    /// Files that were renamed.
    pub renamed: usize,
    /// Files that were moved into a category folder.
    pub moved: usize,
    /// Hidden files that were left alone.
    pub hidden_skipped: usize,
    /// Files left alone because their name could not be processed.
    pub other_skipped: usize,
    /// Moved files per category folder name.
    pub category_counts: BTreeMap<String, usize>,
    /// Every per-file and per-directory failure, in the order it occurred.
    pub errors: Vec<OrganizeError>,
}

impl RunReport {
    /// Returns true if any file or directory failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn record_move(&mut self, category: &Category) {
        self.moved += 1;
        *self
            .category_counts
            .entry(category.dir_name().into_owned())
            .or_insert(0) += 1;
    }

    fn record_error(&mut self, err: OrganizeError) {
        OutputFormatter::error(&err);
        self.errors.push(err);
    }
}

/// Walks `root` and every subdirectory, normalizing each visible file's name
/// and, when `organize` is set, moving it into its category folder under
/// `root`.
///
/// Per-file failures are printed and collected in the returned report; they
/// never stop the walk. A subdirectory that cannot be listed is reported and
/// its subtree skipped. The only error returned is an invalid `root`.
///
/// # Examples
///
/// ```no_run
/// use filetidy::walker::process_directory;
/// use std::path::Path;
///
/// let report = process_directory(Path::new("/home/user/Downloads"), true)?;
/// println!("{} renamed, {} moved", report.renamed, report.moved);
/// # Ok::<(), filetidy::OrganizeError>(())
/// ```
pub fn process_directory(root: &Path, organize: bool) -> OrganizeResult<RunReport> {
    if !root.is_dir() {
        return Err(OrganizeError::InvalidBasePath {
            path: root.to_path_buf(),
        });
    }

    OutputFormatter::start(&root.display().to_string());

    let mut report = RunReport::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                report.record_error(OrganizeError::DirectoryUnreadable {
                    path,
                    source: io::Error::from(e),
                });
                continue;
            }
        };

        // Follows symlinks, so links to directories are skipped too.
        if entry.path().is_dir() {
            continue;
        }

        process_file(root, entry.path(), organize, &mut report);
    }

    Ok(report)
}

fn process_file(root: &Path, path: &Path, organize: bool, report: &mut RunReport) {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        OutputFormatter::warning(&format!(
            "skipping '{}': name is not valid UTF-8",
            path.display()
        ));
        report.other_skipped += 1;
        return;
    };

    if is_hidden(name) {
        report.hidden_skipped += 1;
        return;
    }

    report.files_visited += 1;

    let parts = FilenameParts::split(name);
    let new_name = parts.normalized_name();
    let mut current = path.to_path_buf();

    if new_name == parts.extension {
        report.record_error(OrganizeError::RenameFailed {
            path: path.to_path_buf(),
            new_name,
            source: io::Error::new(
                io::ErrorKind::InvalidInput,
                "normalized name would be empty",
            ),
        });
    } else if new_name != name {
        match FileOrganizer::rename_in_place(path, &new_name) {
            Ok(op) => {
                OutputFormatter::renamed(name, &new_name);
                report.renamed += 1;
                current = op.new_path;
            }
            Err(e) => report.record_error(e),
        }
    }

    if !organize {
        return;
    }

    let category = Category::from_extension(parts.extension);
    match FileOrganizer::move_to_category(root, &current, &category) {
        Ok(Some(op)) => {
            let moved_name = op
                .new_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            OutputFormatter::moved(&moved_name, &category.dir_name());
            report.record_move(&category);
        }
        Ok(None) => {}
        Err(e) => report.record_error(e),
    }
}
