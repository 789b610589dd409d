//! hito core library: UI-agnostic file browser logic.
//!
//! `hito-core` holds the state machine behind the `hito` terminal browser:
//! directory listing, cursor and viewport tracking, bounded previews and
//! the command dispatcher. It has no terminal dependencies apart from
//! `ratatui::style::Color` for theme parsing.
//!
//! # Modules
//!
//! - [`fs`]: [`FileEntry`], directory reading, previews.
//! - [`nav`]: Sorting, filtering, [`Listing`] and [`NavigationState`].
//! - [`session`]: [`SessionState`] and the [`Controller`] that dispatches [`Command`]s.
//! - [`config`]: TOML settings, theme and keymap.
//! - [`action`]: Key-bindable actions and their registry.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;
pub mod session;

pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use fs::entry::{FileEntry, PARENT_SENTINEL};
pub use fs::lister::{list_directory, read_directory, DirectoryLister, FsLister};
pub use fs::preview::{FsPreviewer, Preview, PreviewLimits, PreviewLine, PreviewReader};
pub use nav::filter::{filter_hidden, sort_entries};
pub use nav::listing::Listing;
pub use nav::navigation::NavigationState;
pub use session::{Controller, SessionState};

pub use action::{Action, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::Config;
pub use config::theme::{parse_color, Theme};
