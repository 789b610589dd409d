//! Directory reading.
//!
//! [`DirectoryLister`] is the seam between the session controller and the
//! filesystem. [`FsLister`] is the real implementation; tests substitute
//! in-memory listers to exercise failure paths.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::FileEntry;
use crate::nav::listing::Listing;

/// Produces directory listings and resolves paths to canonical form.
pub trait DirectoryLister {
    /// Lists the direct children of `path`, filtered and sorted.
    ///
    /// The returned listing never contains the parent sentinel.
    fn list(&self, path: &Path, show_hidden: bool) -> CoreResult<Listing>;

    /// Returns the canonical absolute form of `path`.
    fn resolve(&self, path: &Path) -> CoreResult<PathBuf>;
}

/// [`DirectoryLister`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLister;

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path, show_hidden: bool) -> CoreResult<Listing> {
        list_directory(path, show_hidden)
    }

    fn resolve(&self, path: &Path) -> CoreResult<PathBuf> {
        path.canonicalize().map_err(|e| CoreError::from_io(e, path))
    }
}

/// Reads `path` and returns its visible children in listing order.
///
/// # Errors
///
/// Same as [`read_directory`].
pub fn list_directory(path: &Path, show_hidden: bool) -> CoreResult<Listing> {
    let raw = read_directory(path)?;
    Ok(Listing::new(&raw, show_hidden))
}

/// Reads the immediate contents of a directory and returns them as [`FileEntry`] values.
///
/// The returned entries are **unsorted** and include hidden files. A child
/// whose metadata cannot be read is skipped rather than failing the whole
/// read.
///
/// # Errors
///
/// - [`CoreError::NotFound`]: the path does not exist.
/// - [`CoreError::NotADirectory`]: the path is not a directory.
/// - [`CoreError::PermissionDenied`]: read access is denied.
/// - [`CoreError::Io`]: any other I/O error.
///
/// # Examples
///
/// ```no_run
/// use hito_core::read_directory;
/// use std::path::Path;
///
/// let entries = read_directory(Path::new("/home/user")).unwrap();
/// for entry in &entries {
///     println!("{}", entry.name());
/// }
/// ```
pub fn read_directory(path: &Path) -> CoreResult<Vec<FileEntry>> {
    let metadata = std::fs::metadata(path).map_err(|e| CoreError::from_io(e, path))?;
    if !metadata.is_dir() {
        return Err(CoreError::NotADirectory(path.to_path_buf()));
    }

    let read_dir = std::fs::read_dir(path).map_err(|e| CoreError::from_io(e, path))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = match dir_entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };
        let metadata = match dir_entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!("skipping {}: {e}", dir_entry.path().display());
                continue;
            }
        };
        entries.push(FileEntry::new(dir_entry.path(), &metadata));
    }

    Ok(entries)
}
