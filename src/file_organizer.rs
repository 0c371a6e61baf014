/// File renaming and category moves.
///
/// This module provides the filesystem primitives used while tidying a tree:
/// renaming a file within its own folder and moving a file into a category
/// subdirectory of the traversal root. Neither primitive ever overwrites an
/// existing entry; a name collision is reported as an error instead.
use crate::file_category::Category;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// The kind of change an [`Operation`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// The file was renamed inside its folder.
    Rename,
    /// The file was moved into a category folder.
    Move,
}

/// Represents a single completed filesystem change.
#[derive(Debug, Clone)]
pub struct Operation {
    /// What kind of change was made.
    pub kind: OperationKind,
    /// The path of the file before the change.
    pub original_path: PathBuf,
    /// The path of the file after the change.
    pub new_path: PathBuf,
    /// The category folder the file was moved to, for moves.
    pub category: Option<Category>,
}

/// Errors that can occur while renaming or organizing files.
#[derive(Debug)]
pub enum OrganizeError {
    /// The traversal root does not exist or is not a directory.
    InvalidBasePath { path: PathBuf },
    /// A directory inside the tree could not be listed.
    DirectoryUnreadable {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to create a category directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: io::Error,
    },
    /// Failed to rename a file inside its folder.
    RenameFailed {
        path: PathBuf,
        new_name: String,
        source: io::Error,
    },
    /// Failed to move a file into its category directory.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: io::Error,
    },
}

impl OrganizeError {
    /// Returns the path this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::InvalidBasePath { path }
            | Self::DirectoryUnreadable { path, .. }
            | Self::DirectoryCreationFailed { path, .. }
            | Self::RenameFailed { path, .. } => path.as_path(),
            Self::FileMoveFailure { source, .. } => source.as_path(),
        }
    }
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBasePath { path } => {
                write!(
                    f,
                    "The provided path '{}' is not a valid directory.",
                    path.display()
                )
            }
            Self::DirectoryUnreadable { path, source } => {
                write!(f, "Failed to read directory {}: {}", path.display(), source)
            }
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::RenameFailed {
                path,
                new_name,
                source,
            } => {
                write!(
                    f,
                    "Failed to rename {} to '{}': {}",
                    path.display(),
                    new_name,
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
        }
    }
}

impl std::error::Error for OrganizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidBasePath { .. } => None,
            Self::DirectoryUnreadable { source, .. }
            | Self::DirectoryCreationFailed { source, .. }
            | Self::RenameFailed { source, .. } => Some(source),
            Self::FileMoveFailure { source_error, .. } => Some(source_error),
        }
    }
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Renames files in place and moves them into category subdirectories.
pub struct FileOrganizer;

impl FileOrganizer {
    /// Renames a file within its current folder.
    ///
    /// Fails with [`OrganizeError::RenameFailed`] if another entry already
    /// holds the new name. A rename that only changes letter case is allowed
    /// on case-insensitive filesystems, where both names resolve to the same
    /// file.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filetidy::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// match FileOrganizer::rename_in_place(Path::new("/tmp/My File.txt"), "my_file.txt") {
    ///     Ok(op) => println!("Renamed to {}", op.new_path.display()),
    ///     Err(e) => eprintln!("{}", e),
    /// }
    /// ```
    pub fn rename_in_place(file_path: &Path, new_name: &str) -> OrganizeResult<Operation> {
        let rename_error = |source: io::Error| OrganizeError::RenameFailed {
            path: file_path.to_path_buf(),
            new_name: new_name.to_string(),
            source,
        };

        let destination = file_path.with_file_name(new_name);

        if fs::symlink_metadata(&destination).is_ok() && !same_entry(file_path, &destination) {
            return Err(rename_error(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("'{}' already exists", new_name),
            )));
        }

        fs::rename(file_path, &destination).map_err(rename_error)?;

        Ok(Operation {
            kind: OperationKind::Rename,
            original_path: file_path.to_path_buf(),
            new_path: destination,
            category: None,
        })
    }

    /// Moves a file into its category directory directly under `base_path`.
    ///
    /// The category directory is created if it doesn't exist. Returns
    /// `Ok(None)` without touching the file when it already lives in the
    /// category directory.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use filetidy::file_category::Category;
    /// use filetidy::file_organizer::FileOrganizer;
    /// use std::path::Path;
    ///
    /// let result = FileOrganizer::move_to_category(
    ///     Path::new("/path/to/base"),
    ///     Path::new("/path/to/base/nested/image.png"),
    ///     &Category::Images,
    /// );
    ///
    /// match result {
    ///     Ok(Some(op)) => println!("Moved to {}", op.new_path.display()),
    ///     Ok(None) => println!("Already in place"),
    ///     Err(e) => eprintln!("Organization failed: {}", e),
    /// }
    /// ```
    pub fn move_to_category(
        base_path: &Path,
        file_path: &Path,
        category: &Category,
    ) -> OrganizeResult<Option<Operation>> {
        if !base_path.is_dir() {
            return Err(OrganizeError::InvalidBasePath {
                path: base_path.to_path_buf(),
            });
        }

        let category_path = base_path.join(&*category.dir_name());

        fs::create_dir_all(&category_path).map_err(|e| OrganizeError::DirectoryCreationFailed {
            path: category_path.clone(),
            source: e,
        })?;

        if file_path.parent() == Some(category_path.as_path()) {
            return Ok(None);
        }

        let file_name = file_path
            .file_name()
            .ok_or_else(|| OrganizeError::FileMoveFailure {
                source: file_path.to_path_buf(),
                destination: category_path.clone(),
                source_error: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "file has no name component",
                ),
            })?;

        let destination_path = category_path.join(file_name);
        let move_error = |e: io::Error| OrganizeError::FileMoveFailure {
            source: file_path.to_path_buf(),
            destination: destination_path.clone(),
            source_error: e,
        };

        if fs::symlink_metadata(&destination_path).is_ok() {
            return Err(move_error(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "destination already exists",
            )));
        }

        move_file(file_path, &destination_path).map_err(move_error)?;

        Ok(Some(Operation {
            kind: OperationKind::Move,
            original_path: file_path.to_path_buf(),
            new_path: destination_path.clone(),
            category: Some(category.clone()),
        }))
    }
}

/// Moves a file, copying and removing the original when a plain rename
/// cannot cross filesystems.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        other => other,
    }
}

/// Returns true if both paths name the same filesystem entry.
#[cfg(unix)]
fn same_entry(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::symlink_metadata(a), fs::symlink_metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

/// Returns true if both paths name the same filesystem entry.
#[cfg(not(unix))]
fn same_entry(a: &Path, b: &Path) -> bool {
    match (a.file_name(), b.file_name()) {
        (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rename_in_place() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file_path = temp_dir.path().join("My File.txt");
        fs::write(&file_path, "content").expect("Failed to write test file");

        let op = FileOrganizer::rename_in_place(&file_path, "my_file.txt")
            .expect("Failed to rename file");

        assert_eq!(op.kind, OperationKind::Rename);
        assert!(!file_path.exists());
        assert_eq!(op.new_path, temp_dir.path().join("my_file.txt"));
        assert!(op.new_path.exists());
    }

    #[test]
    fn test_rename_refuses_to_overwrite() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let source = temp_dir.path().join("A B.txt");
        let taken = temp_dir.path().join("a_b.txt");
        fs::write(&source, "source").expect("Failed to write test file");
        fs::write(&taken, "taken").expect("Failed to write test file");

        let err = FileOrganizer::rename_in_place(&source, "a_b.txt").unwrap_err();

        assert!(matches!(err, OrganizeError::RenameFailed { .. }));
        assert_eq!(err.path(), source.as_path());
        assert!(source.exists());
        assert_eq!(fs::read_to_string(&taken).unwrap(), "taken");
    }

    #[test]
    fn test_move_to_category_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let op = FileOrganizer::move_to_category(base_path, &file_path, &Category::Documents)
            .expect("Failed to move file")
            .expect("File should have been moved");

        let category_dir = base_path.join("Documents");
        assert!(category_dir.is_dir());
        assert!(!file_path.exists());
        assert_eq!(op.new_path, category_dir.join("test.txt"));
        assert_eq!(op.category, Some(Category::Documents));
    }

    #[test]
    fn test_move_to_category_from_nested_folder() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let nested = base_path.join("a").join("b");
        fs::create_dir_all(&nested).expect("Failed to create nested dirs");
        let file_path = nested.join("clip.mov");
        fs::write(&file_path, "video").expect("Failed to write test file");

        FileOrganizer::move_to_category(base_path, &file_path, &Category::Videos)
            .expect("Failed to move file");

        assert!(base_path.join("Videos").join("clip.mov").exists());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_move_skipped_when_already_in_category() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let category_dir = base_path.join("Images");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        let file_path = category_dir.join("pic.png");
        fs::write(&file_path, "png").expect("Failed to write test file");

        let result = FileOrganizer::move_to_category(base_path, &file_path, &Category::Images)
            .expect("Move check should succeed");

        assert!(result.is_none());
        assert!(file_path.exists());
    }

    #[test]
    fn test_move_refuses_to_overwrite() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let category_dir = base_path.join("ZIP Files");
        fs::create_dir(&category_dir).expect("Failed to create category directory");
        fs::write(category_dir.join("data.zip"), "old").expect("Failed to write test file");

        let nested = base_path.join("sub");
        fs::create_dir(&nested).expect("Failed to create subdirectory");
        let file_path = nested.join("data.zip");
        fs::write(&file_path, "new").expect("Failed to write test file");

        let category = Category::Other("ZIP".to_string());
        let err = FileOrganizer::move_to_category(base_path, &file_path, &category).unwrap_err();

        assert!(matches!(err, OrganizeError::FileMoveFailure { .. }));
        assert!(file_path.exists());
        assert_eq!(
            fs::read_to_string(category_dir.join("data.zip")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_move_to_category_invalid_base_path() {
        let non_existent = Path::new("/non/existent/path");
        let file_path = Path::new("/some/file.txt");

        let result = FileOrganizer::move_to_category(non_existent, file_path, &Category::Documents);
        assert!(matches!(
            result,
            Err(OrganizeError::InvalidBasePath { .. })
        ));
    }
}
