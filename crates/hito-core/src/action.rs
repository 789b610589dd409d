//! Unified action system for hito.
//!
//! Every key-bindable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides metadata (keymap id and help name)
//! used to parse `keymap.toml` and to build the help line.

/// Every key-bindable action.
///
/// Variants carry no parameters; context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Navigation
    CursorUp,
    CursorDown,
    Enter,
    GoParent,
    Refresh,
    // View
    ToggleHidden,
    DismissStatus,
    Search,
    // File Operations
    Copy,
    Cut,
    Delete,
    Rename,
    NewDirectory,
    // System
    Quit,
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Short name shown in the help line (e.g. `"up"`).
    pub name: &'static str,
}

/// Registry of all available actions.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let d = |action, id, name| ActionDescriptor { action, id, name };
        let descriptors = vec![
            d(Action::CursorUp, "cursor_up", "up"),
            d(Action::CursorDown, "cursor_down", "down"),
            d(Action::Enter, "enter", "open"),
            d(Action::GoParent, "go_parent", "back"),
            d(Action::Refresh, "refresh", "refresh"),
            d(Action::ToggleHidden, "toggle_hidden", "hidden"),
            d(Action::DismissStatus, "dismiss", "dismiss"),
            d(Action::Search, "search", "search"),
            d(Action::Copy, "copy", "copy"),
            d(Action::Cut, "cut", "cut"),
            d(Action::Delete, "delete", "delete"),
            d(Action::Rename, "rename", "rename"),
            d(Action::NewDirectory, "new_directory", "mkdir"),
            d(Action::Quit, "quit", "quit"),
        ];
        Self { descriptors }
    }

    #[cfg(test)]
    pub(crate) fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }

    /// Finds an action by its string id (for keymap.toml parsing).
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for a given action.
    pub fn descriptor_for(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_action() {
        let registry = ActionRegistry::new();
        assert_eq!(registry.all().len(), 14);
        for d in registry.all() {
            assert_eq!(registry.find_by_id(d.id), Some(d.action));
        }
    }

    #[test]
    fn find_by_id_returns_correct_action() {
        let registry = ActionRegistry::new();
        assert_eq!(registry.find_by_id("cursor_up"), Some(Action::CursorUp));
        assert_eq!(registry.find_by_id("quit"), Some(Action::Quit));
        assert_eq!(
            registry.find_by_id("toggle_hidden"),
            Some(Action::ToggleHidden)
        );
    }

    #[test]
    fn find_by_id_unknown_returns_none() {
        let registry = ActionRegistry::new();
        assert_eq!(registry.find_by_id("command_palette"), None);
    }

    #[test]
    fn ids_are_unique() {
        let registry = ActionRegistry::new();
        let mut ids: Vec<&str> = registry.all().iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), registry.all().len());
    }

    #[test]
    fn descriptor_for_returns_metadata() {
        let registry = ActionRegistry::new();
        let desc = registry.descriptor_for(Action::Quit).unwrap();
        assert_eq!(desc.id, "quit");
        assert_eq!(desc.name, "quit");
        let mkdir = registry.descriptor_for(Action::NewDirectory).unwrap();
        assert_eq!((mkdir.id, mkdir.name), ("new_directory", "mkdir"));
    }
}
