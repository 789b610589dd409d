//! File system abstractions for hito.
//!
//! This module provides the entry type ([`entry::FileEntry`]), directory
//! reading behind the [`lister::DirectoryLister`] seam, and bounded file
//! previews ([`preview::Preview`]).

pub mod entry;
pub mod lister;
pub mod preview;

pub use lister::{DirectoryLister, FsLister};
pub use preview::{FsPreviewer, Preview, PreviewLimits, PreviewLine, PreviewReader};
