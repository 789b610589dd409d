//! Error types for `hito-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a one-line status message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The target path does not exist.
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// The process lacks permission to access the path.
    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// A directory was expected but the path points to a file.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// A regular file was expected, e.g. the path is a FIFO or a device.
    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// The action needs a selected entry but the listing is empty.
    #[error("no file selected")]
    NoSelection,

    /// Standard output is not attached to an interactive terminal.
    #[error("not a terminal")]
    NotATerminal,

    /// An I/O error that doesn't fit a more specific variant.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Maps an I/O error on `path` to the most specific variant.
    pub fn from_io(err: std::io::Error, path: &Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err),
        }
    }
}

/// Convenience alias used throughout `hito-core`.
pub type CoreResult<T> = Result<T, CoreError>;
