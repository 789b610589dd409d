//! Session state and the command dispatcher.
//!
//! [`SessionState`] is plain data. [`Controller`] owns the I/O
//! collaborators and turns `(state, command)` into the next state. All
//! filesystem access goes through the [`DirectoryLister`] and
//! [`PreviewReader`] seams.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::event::Command;
use crate::fs::entry::FileEntry;
use crate::fs::lister::{DirectoryLister, FsLister};
use crate::fs::preview::{FsPreviewer, Preview, PreviewReader};
use crate::nav::listing::Listing;
use crate::nav::navigation::NavigationState;

/// Everything the UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    cwd: PathBuf,
    show_hidden: bool,
    status: Option<String>,
    should_quit: bool,
    nav: NavigationState,
    preview: Preview,
}

impl SessionState {
    /// The directory being listed, in canonical form.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// The transient status message, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn listing(&self) -> &Listing {
        self.nav.listing()
    }

    pub fn selected(&self) -> Option<&FileEntry> {
        self.nav.selected()
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    /// Returns a new state with `message` as the status.
    pub fn with_status(self, message: impl Into<String>) -> Self {
        Self {
            status: Some(message.into()),
            ..self
        }
    }

    fn without_status(self) -> Self {
        Self {
            status: None,
            ..self
        }
    }
}

/// Drives a [`SessionState`] through [`Command`]s.
#[derive(Debug, Clone)]
pub struct Controller<L = FsLister, P = FsPreviewer> {
    lister: L,
    previewer: P,
    show_parent_entry: bool,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(FsLister, FsPreviewer::default())
    }
}

impl<L: DirectoryLister, P: PreviewReader> Controller<L, P> {
    pub fn new(lister: L, previewer: P) -> Self {
        Self {
            lister,
            previewer,
            show_parent_entry: true,
        }
    }

    /// Controls whether non-root listings start with a `..` entry.
    pub fn with_parent_entry(self, show_parent_entry: bool) -> Self {
        Self {
            show_parent_entry,
            ..self
        }
    }

    #[cfg(test)]
    pub(crate) fn lister(&self) -> &L {
        &self.lister
    }

    /// Builds the initial state for `path`.
    ///
    /// If `path` cannot be resolved it is used as given. A failed first
    /// read leaves the listing empty and reports the error as status.
    pub fn start(&self, path: &Path, show_hidden: bool, viewport_height: usize) -> SessionState {
        let cwd = self
            .lister
            .resolve(path)
            .unwrap_or_else(|_| path.to_path_buf());

        let state = SessionState {
            cwd,
            show_hidden,
            status: None,
            should_quit: false,
            nav: NavigationState::new(viewport_height),
            preview: Preview::None,
        };

        let state = match self.load(&state.cwd, show_hidden) {
            Ok(listing) => SessionState {
                nav: state.nav.with_listing_reset(listing),
                ..state
            },
            Err(e) => {
                tracing::warn!("initial read of {} failed: {e}", state.cwd.display());
                state.with_status(reload_error(&e))
            }
        };
        self.refresh_preview(state)
    }

    /// Applies `command` to `state` and returns the next state.
    ///
    /// Every command except [`Command::Quit`] and [`Command::Resize`]
    /// clears the previous status first.
    pub fn dispatch(&self, state: SessionState, command: Command) -> SessionState {
        let state = match command {
            Command::Quit | Command::Resize { .. } => state,
            _ => state.without_status(),
        };

        match command {
            Command::Quit => SessionState {
                should_quit: true,
                ..state
            },
            Command::Resize { viewport_height } => SessionState {
                nav: state.nav.with_viewport_height(viewport_height),
                ..state
            },
            Command::CursorUp => {
                let nav = state.nav.move_up();
                self.refresh_preview(SessionState { nav, ..state })
            }
            Command::CursorDown => {
                let nav = state.nav.move_down();
                self.refresh_preview(SessionState { nav, ..state })
            }
            Command::Enter => self.enter(state),
            Command::GoParent => self.go_parent(state),
            Command::ToggleHidden => self.toggle_hidden(state),
            Command::Refresh => {
                let show_hidden = state.show_hidden;
                self.reload(state, show_hidden)
            }
            Command::DismissStatus => state,
            Command::Copy => {
                let message = match state.selected() {
                    Some(entry) if !entry.is_dir() => {
                        format!("Copy mode: {} (press Enter on destination)", entry.name())
                    }
                    _ => "Cannot copy directory".to_string(),
                };
                state.with_status(message)
            }
            Command::Cut => {
                let message = match state.selected() {
                    Some(entry) if !entry.is_dir() => {
                        format!("Cut mode: {} (press Enter on destination)", entry.name())
                    }
                    _ => "Cannot move directory".to_string(),
                };
                state.with_status(message)
            }
            Command::Delete => {
                let message = match state.selected() {
                    Some(entry) => format!(
                        "Delete: {} (not implemented - use system commands for safety)",
                        entry.name()
                    ),
                    None => error_status(&CoreError::NoSelection),
                };
                state.with_status(message)
            }
            Command::Rename => {
                let message = match state.selected() {
                    Some(entry) => format!("Rename: {} (not implemented)", entry.name()),
                    None => error_status(&CoreError::NoSelection),
                };
                state.with_status(message)
            }
            Command::NewDirectory => state.with_status("Create directory (not implemented)"),
            Command::Search => state.with_status("Search (not implemented)"),
        }
    }

    fn enter(&self, state: SessionState) -> SessionState {
        let Some(entry) = state.selected() else {
            return state.with_status(error_status(&CoreError::NoSelection));
        };
        if entry.is_parent_sentinel() {
            return self.go_parent(state);
        }
        if !entry.is_dir() {
            return state;
        }
        let target = entry.path().to_path_buf();
        self.change_dir(state, &target)
    }

    fn go_parent(&self, state: SessionState) -> SessionState {
        match self.parent_of(&state.cwd) {
            Some(parent) => self.change_dir(state, &parent),
            None => state,
        }
    }

    fn toggle_hidden(&self, state: SessionState) -> SessionState {
        let show_hidden = !state.show_hidden;
        let state = self.reload(state, show_hidden);
        if state.show_hidden != show_hidden {
            return state;
        }
        let label = if show_hidden { "shown" } else { "hidden" };
        state.with_status(format!("Hidden files: {label}"))
    }

    /// Re-reads the current directory, keeping the selection where possible.
    fn reload(&self, state: SessionState, show_hidden: bool) -> SessionState {
        match self.load(&state.cwd, show_hidden) {
            Ok(listing) => self.refresh_preview(SessionState {
                show_hidden,
                nav: state.nav.with_listing(listing),
                ..state
            }),
            Err(e) => {
                tracing::warn!("reload of {} failed: {e}", state.cwd.display());
                state.with_status(reload_error(&e))
            }
        }
    }

    fn change_dir(&self, state: SessionState, target: &Path) -> SessionState {
        let resolved = match self.lister.resolve(target) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("cannot resolve {}: {e}", target.display());
                return state.with_status(reload_error(&e));
            }
        };
        match self.load(&resolved, state.show_hidden) {
            Ok(listing) => {
                tracing::debug!("changed directory to {}", resolved.display());
                self.refresh_preview(SessionState {
                    cwd: resolved,
                    nav: state.nav.with_listing_reset(listing),
                    ..state
                })
            }
            Err(e) => {
                tracing::warn!("cannot enter {}: {e}", resolved.display());
                state.with_status(reload_error(&e))
            }
        }
    }

    /// Lists `path` and prepends the parent sentinel when one applies.
    fn load(&self, path: &Path, show_hidden: bool) -> CoreResult<Listing> {
        let listing = self.lister.list(path, show_hidden)?;
        if !self.show_parent_entry {
            return Ok(listing);
        }
        Ok(match self.parent_of(path) {
            Some(parent) => listing.with_parent(parent),
            None => listing,
        })
    }

    /// The resolved parent of `path`, or `None` at the root.
    fn parent_of(&self, path: &Path) -> Option<PathBuf> {
        let parent = path.parent()?;
        let resolved = self
            .lister
            .resolve(parent)
            .unwrap_or_else(|_| parent.to_path_buf());
        (resolved != path).then_some(resolved)
    }

    fn refresh_preview(&self, state: SessionState) -> SessionState {
        let preview = self.previewer.preview(state.nav.selected());
        SessionState { preview, ..state }
    }
}

fn reload_error(err: &CoreError) -> String {
    format!("Error reading directory: {err}")
}

fn error_status(err: &CoreError) -> String {
    format!("Error: {err}")
}
