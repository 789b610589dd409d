//! Commands sent from the UI to the core.
//!
//! The UI translates user input into [`Command`]s and hands them to
//! [`crate::session::Controller::dispatch`]. The core never creates
//! commands itself.

use crate::action::Action;

/// A state transition the UI requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor up by one entry.
    CursorUp,
    /// Move the cursor down by one entry.
    CursorDown,
    /// Activate the selected entry (enter a directory or `..`).
    Enter,
    /// Move to the parent directory.
    GoParent,
    /// Toggle visibility of hidden (dot-prefixed) files.
    ToggleHidden,
    /// Re-read the current directory.
    Refresh,
    /// Clear the status message.
    DismissStatus,
    /// The list viewport changed height.
    Resize { viewport_height: usize },
    Copy,
    Cut,
    Delete,
    Rename,
    NewDirectory,
    Search,
    /// End the session.
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        match action {
            Action::Quit => Self::Quit,
            Action::CursorUp => Self::CursorUp,
            Action::CursorDown => Self::CursorDown,
            Action::Enter => Self::Enter,
            Action::GoParent => Self::GoParent,
            Action::ToggleHidden => Self::ToggleHidden,
            Action::Refresh => Self::Refresh,
            Action::DismissStatus => Self::DismissStatus,
            Action::Copy => Self::Copy,
            Action::Cut => Self::Cut,
            Action::Delete => Self::Delete,
            Action::Rename => Self::Rename,
            Action::NewDirectory => Self::NewDirectory,
            Action::Search => Self::Search,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_action_maps_to_a_command() {
        assert_eq!(Command::from(Action::Quit), Command::Quit);
        assert_eq!(Command::from(Action::Enter), Command::Enter);
        assert_eq!(Command::from(Action::GoParent), Command::GoParent);
        assert_eq!(Command::from(Action::NewDirectory), Command::NewDirectory);
    }

    #[test]
    fn resize_carries_height() {
        let cmd = Command::Resize { viewport_height: 12 };
        assert!(matches!(cmd, Command::Resize { viewport_height: 12 }));
    }
}
