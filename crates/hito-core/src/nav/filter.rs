//! Sorting and filtering for file entries.

use std::cmp::Ordering;

use crate::fs::entry::FileEntry;

/// Sorts entries into listing order.
///
/// The parent sentinel comes first, then directories, then files. Within
/// each group names compare case-sensitively (byte order), so `"B"` sorts
/// before `"a"`. Returns a **new** `Vec`; the input slice is never mutated.
pub fn sort_entries(entries: &[FileEntry]) -> Vec<FileEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(listing_order);
    sorted
}

/// Total order used by [`sort_entries`].
pub fn listing_order(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_parent_sentinel()
        .cmp(&a.is_parent_sentinel())
        .then_with(|| b.is_dir().cmp(&a.is_dir()))
        .then_with(|| a.name().cmp(b.name()))
}

/// Filters out hidden entries when `show_hidden` is `false`.
///
/// When `show_hidden` is `true` all entries are returned unchanged. The
/// parent sentinel is never considered hidden.
pub fn filter_hidden(entries: &[FileEntry], show_hidden: bool) -> Vec<FileEntry> {
    if show_hidden {
        return entries.to_vec();
    }
    entries.iter().filter(|e| !e.is_hidden()).cloned().collect()
}
