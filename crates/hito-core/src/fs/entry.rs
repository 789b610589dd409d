//! File entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use unicode_normalization::UnicodeNormalization;

/// Display name of the synthetic "go to parent" entry.
pub const PARENT_SENTINEL: &str = "..";

/// A single file or directory entry.
///
/// `FileEntry` is immutable; create new instances via [`FileEntry::new`]
/// or [`FileEntry::parent_sentinel`] rather than mutating existing ones.
/// Directory sizes are reported as `0`.
///
/// # Examples
///
/// ```no_run
/// use hito_core::FileEntry;
/// use std::fs;
///
/// let metadata = fs::metadata("Cargo.toml").unwrap();
/// let entry = FileEntry::new("Cargo.toml".into(), &metadata);
/// assert_eq!(entry.name(), "Cargo.toml");
/// assert!(!entry.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    path: PathBuf,
    name: String,
    size: u64,
    modified: Option<SystemTime>,
    is_dir: bool,
    is_hidden: bool,
    is_symlink: bool,
    is_parent: bool,
}

impl FileEntry {
    /// Creates a new `FileEntry` from a path and its metadata.
    ///
    /// Hidden files are detected by a leading `.` in the file name.
    /// Directory sizes are set to `0`.
    pub fn new(path: PathBuf, metadata: &std::fs::Metadata) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_hidden = name.starts_with('.');

        Self {
            path,
            name,
            size: if metadata.is_dir() { 0 } else { metadata.len() },
            modified: metadata.modified().ok(),
            is_dir: metadata.is_dir(),
            is_hidden,
            is_symlink: metadata.is_symlink(),
            is_parent: false,
        }
    }

    /// Creates the synthetic `..` entry pointing at `parent`.
    ///
    /// The sentinel is a directory, is never hidden, and carries no
    /// modification time.
    pub fn parent_sentinel(parent: PathBuf) -> Self {
        Self {
            path: parent,
            name: PARENT_SENTINEL.to_string(),
            size: 0,
            modified: None,
            is_dir: true,
            is_hidden: false,
            is_symlink: false,
            is_parent: true,
        }
    }

    /// Builds an entry from already-known attributes.
    ///
    /// Used by listers that do not go through `std::fs::Metadata`.
    pub fn from_parts(
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
        is_dir: bool,
    ) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().nfc().collect::<String>())
            .unwrap_or_default();
        let is_hidden = name.starts_with('.');
        Self {
            path,
            name,
            size: if is_dir { 0 } else { size },
            modified,
            is_dir,
            is_hidden,
            is_symlink: false,
            is_parent: false,
        }
    }

    /// Returns the full path of this entry.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the file or directory name (last component of the path).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file size in bytes. Always `0` for directories.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Returns the last-modified time, if available.
    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Returns `true` if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Returns `true` if the name starts with `.`.
    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    /// Returns `true` if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    /// Returns `true` for the synthetic `..` entry.
    pub fn is_parent_sentinel(&self) -> bool {
        self.is_parent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn file_entry_from_regular_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("test.txt");
        fs::write(&file_path, "hello").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path.clone(), &metadata);

        assert_eq!(entry.name(), "test.txt");
        assert_eq!(entry.size(), 5);
        assert!(!entry.is_dir());
        assert!(!entry.is_hidden());
        assert!(!entry.is_parent_sentinel());
        assert_eq!(entry.path(), file_path);
        assert!(entry.modified().is_some());
    }

    #[test]
    fn file_entry_from_directory() {
        let tmp = TempDir::new().unwrap();
        let dir_path = tmp.path().join("subdir");
        fs::create_dir(&dir_path).unwrap();
        fs::write(dir_path.join("a.txt"), "data").unwrap();

        let metadata = fs::metadata(&dir_path).unwrap();
        let entry = FileEntry::new(dir_path, &metadata);

        assert_eq!(entry.name(), "subdir");
        assert_eq!(entry.size(), 0);
        assert!(entry.is_dir());
    }

    #[test]
    fn file_entry_hidden_file() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join(".hidden");
        fs::write(&file_path, "secret").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert!(entry.is_hidden());
        assert_eq!(entry.size(), 6);
    }

    #[cfg(unix)]
    #[test]
    fn file_entry_symlink() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("target.txt");
        fs::write(&target, "data").unwrap();

        let link = tmp.path().join("link.txt");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let metadata = fs::symlink_metadata(&link).unwrap();
        let entry = FileEntry::new(link, &metadata);

        assert!(entry.is_symlink());
        assert_eq!(entry.name(), "link.txt");
    }

    #[test]
    fn file_entry_unicode_name() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("한글파일.txt");
        fs::write(&file_path, "내용").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry = FileEntry::new(file_path, &metadata);

        assert_eq!(entry.name(), "한글파일.txt");
    }

    #[test]
    fn parent_sentinel_is_visible_directory() {
        let entry = FileEntry::parent_sentinel(PathBuf::from("/home"));

        assert_eq!(entry.name(), PARENT_SENTINEL);
        assert_eq!(entry.path(), Path::new("/home"));
        assert!(entry.is_dir());
        assert!(entry.is_parent_sentinel());
        // ".." starts with a dot but must never be filtered as hidden
        assert!(!entry.is_hidden());
        assert!(entry.modified().is_none());
    }

    #[test]
    fn from_parts_dir_has_zero_size() {
        let entry = FileEntry::from_parts(PathBuf::from("/data/docs"), 4096, None, true);
        assert_eq!(entry.name(), "docs");
        assert_eq!(entry.size(), 0);
        assert!(entry.is_dir());
    }

    #[test]
    fn from_parts_detects_hidden() {
        let entry = FileEntry::from_parts(PathBuf::from("/data/.env"), 12, None, false);
        assert!(entry.is_hidden());
        assert_eq!(entry.size(), 12);
    }

    #[test]
    fn file_entry_clone_and_eq() {
        let tmp = TempDir::new().unwrap();
        let file_path = tmp.path().join("test.txt");
        fs::write(&file_path, "abc").unwrap();

        let metadata = fs::metadata(&file_path).unwrap();
        let entry1 = FileEntry::new(file_path, &metadata);
        let entry2 = entry1.clone();

        assert_eq!(entry1, entry2);
    }
}
