//! Cursor and scroll window over a [`Listing`].
//!
//! All transitions consume `self` and return a new [`NavigationState`],
//! following the project-wide immutability convention.

use std::ops::Range;

use crate::fs::entry::FileEntry;
use crate::nav::listing::Listing;

/// Selection and viewport over one directory listing.
///
/// `selected` is `None` exactly when the listing is empty; otherwise it is
/// a valid index. `viewport_height` is always at least `1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    listing: Listing,
    selected: Option<usize>,
    viewport_height: usize,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl NavigationState {
    /// Creates an empty state with the given viewport height.
    pub fn new(viewport_height: usize) -> Self {
        Self {
            listing: Listing::empty(),
            selected: None,
            viewport_height: viewport_height.max(1),
        }
    }

    /// Replaces the listing, keeping the selection where possible.
    ///
    /// An out-of-bounds selection is clamped to the last entry. A state
    /// that had no selection selects the first entry.
    pub fn with_listing(self, listing: Listing) -> Self {
        let selected = match (listing.len(), self.selected) {
            (0, _) => None,
            (len, Some(index)) => Some(index.min(len - 1)),
            (_, None) => Some(0),
        };
        Self {
            listing,
            selected,
            ..self
        }
    }

    /// Replaces the listing and moves the selection to the first entry.
    pub fn with_listing_reset(self, listing: Listing) -> Self {
        let selected = if listing.is_empty() { None } else { Some(0) };
        Self {
            listing,
            selected,
            ..self
        }
    }

    /// Moves the selection up by one. No-op at the top or when empty.
    pub fn move_up(self) -> Self {
        match self.selected {
            Some(index) if index > 0 => Self {
                selected: Some(index - 1),
                ..self
            },
            _ => self,
        }
    }

    /// Moves the selection down by one. No-op at the bottom or when empty.
    pub fn move_down(self) -> Self {
        match self.selected {
            Some(index) if index + 1 < self.listing.len() => Self {
                selected: Some(index + 1),
                ..self
            },
            _ => self,
        }
    }

    /// Stores a new viewport height. Heights below `1` are treated as `1`.
    pub fn with_viewport_height(self, height: usize) -> Self {
        Self {
            viewport_height: height.max(1),
            ..self
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected entry, if any.
    pub fn selected(&self) -> Option<&FileEntry> {
        self.selected.and_then(|i| self.listing.get(i))
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Returns the range of entry indices that fit in the viewport.
    ///
    /// The window always contains the selection. When the listing is
    /// longer than the viewport, the window is the one with the smallest
    /// start that still ends at or after the selection.
    pub fn visible_window(&self) -> Range<usize> {
        let len = self.listing.len();
        let height = self.viewport_height;
        if len <= height {
            return 0..len;
        }
        let selected = self.selected.unwrap_or(0);
        let start = (selected + 1).saturating_sub(height).min(len - height);
        start..start + height
    }
}
