//! Immutable directory snapshot.

use std::path::PathBuf;

use crate::fs::entry::FileEntry;
use crate::nav::filter::{filter_hidden, sort_entries};

/// An ordered snapshot of one directory's entries.
///
/// A `Listing` is never mutated in place; reloading a directory produces a
/// new one. Entries are always in listing order (see
/// [`crate::nav::filter::sort_entries`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    entries: Vec<FileEntry>,
    show_hidden: bool,
}

impl Listing {
    /// Builds a listing from raw directory children.
    ///
    /// Hidden entries are dropped unless `show_hidden` is set, then the rest
    /// are sorted.
    pub fn new(entries: &[FileEntry], show_hidden: bool) -> Self {
        let visible = filter_hidden(entries, show_hidden);
        Self {
            entries: sort_entries(&visible),
            show_hidden,
        }
    }

    /// An empty listing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new listing with a `..` entry pointing at `parent` in front.
    ///
    /// Any existing sentinel is replaced.
    pub fn with_parent(self, parent: PathBuf) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(FileEntry::parent_sentinel(parent));
        entries.extend(
            self.entries
                .into_iter()
                .filter(|e| !e.is_parent_sentinel()),
        );
        Self {
            entries,
            show_hidden: self.show_hidden,
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hidden-file flag this listing was produced with.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Returns `true` if the first entry is the parent sentinel.
    pub fn has_parent(&self) -> bool {
        self.entries
            .first()
            .is_some_and(FileEntry::is_parent_sentinel)
    }
}
