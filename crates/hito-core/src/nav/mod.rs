//! Navigation logic for hito.
//!
//! Entry [`filter`]ing and sorting, the immutable [`listing::Listing`]
//! snapshot, and the cursor/viewport [`navigation::NavigationState`].

pub mod filter;
pub mod listing;
pub mod navigation;
