//! filetidy - recursive file name normalization and organization
//!
//! This library walks a directory tree, renames every visible file to a
//! canonical lowercase/underscore form, and can move files into category
//! folders keyed by their extension.

pub mod cli;
pub mod file_category;
pub mod file_name;
pub mod file_organizer;
pub mod output;
pub mod walker;

pub use file_category::Category;
pub use file_name::{FilenameParts, normalize_stem};
pub use file_organizer::{FileOrganizer, Operation, OrganizeError, OrganizeResult};
pub use walker::{RunReport, process_directory};

pub use cli::{Cli, run_cli};
