//! File name normalization.
//!
//! Turns a file name stem into its canonical form: lowercase, with every run of
//! whitespace, periods and hyphens collapsed into a single underscore.
//!
//! # Examples
//!
//! ```
//! use filetidy::file_name::{FilenameParts, normalize_stem};
//!
//! assert_eq!(normalize_stem("My Photo - Vacation.2023"), "my_photo_vacation_2023");
//!
//! let parts = FilenameParts::split("My Photo.JPG");
//! assert_eq!(parts.normalized_name(), "my_photo.JPG");
//! ```

use regex::Regex;
use std::sync::LazyLock;

static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s.-]+").expect("separator pattern is valid"));

/// Returns the canonical form of a file name stem.
///
/// The transform is applied in order:
/// 1. lowercase every character,
/// 2. replace each run of whitespace, `.` and `-` with one `_`,
/// 3. strip leading and trailing underscores.
///
/// The function is total and idempotent; the empty string maps to itself.
pub fn normalize_stem(stem: &str) -> String {
    let lowered = stem.to_lowercase();
    let collapsed = SEPARATOR_RUN.replace_all(&lowered, "_");
    collapsed.trim_matches('_').to_string()
}

/// Returns true for names that start with the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// A file name split into its stem and extension.
///
/// The extension keeps its leading dot and its original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts<'a> {
    /// Everything before the final extension separator.
    pub stem: &'a str,
    /// The final extension including the dot, or an empty string.
    pub extension: &'a str,
}

impl<'a> FilenameParts<'a> {
    /// Splits a file name at its last `.`.
    ///
    /// Leading dots are part of the stem, so `.bashrc` has no extension and
    /// `archive.tar.gz` splits into `archive.tar` and `.gz`.
    pub fn split(name: &'a str) -> Self {
        match name.rfind('.') {
            Some(idx) if name[..idx].chars().any(|c| c != '.') => Self {
                stem: &name[..idx],
                extension: &name[idx..],
            },
            _ => Self {
                stem: name,
                extension: "",
            },
        }
    }

    /// Returns the normalized stem joined with the untouched extension.
    pub fn normalized_name(&self) -> String {
        format!("{}{}", normalize_stem(self.stem), self.extension)
    }
}
