//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Enter"`, `"Ctrl+r"`) to
//! [`Action`] values. The default bindings follow vim conventions with
//! arrow-key equivalents.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these
//! are resolved to [`Action`] via [`ActionRegistry::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionRegistry};
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation, deserialized first, then resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → list of key strings (for help display).
    reverse: HashMap<Action, Vec<String>>,
}

const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    ("q", Action::Quit),
    ("k", Action::CursorUp),
    ("Up", Action::CursorUp),
    ("j", Action::CursorDown),
    ("Down", Action::CursorDown),
    ("l", Action::Enter),
    ("Enter", Action::Enter),
    ("Right", Action::Enter),
    ("h", Action::GoParent),
    ("Backspace", Action::GoParent),
    ("Left", Action::GoParent),
    (".", Action::ToggleHidden),
    ("Esc", Action::DismissStatus),
    ("Ctrl+r", Action::Refresh),
    ("c", Action::Copy),
    ("x", Action::Cut),
    ("d", Action::Delete),
    ("r", Action::Rename),
    ("n", Action::NewDirectory),
    ("/", Action::Search),
];

impl Default for Keymap {
    fn default() -> Self {
        let bindings: HashMap<String, Action> = DEFAULT_BINDINGS
            .iter()
            .map(|(key, action)| (key.to_string(), *action))
            .collect();
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // shortest first, then lexical, so single characters lead the help line
    for keys in reverse.values_mut() {
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    }
    reverse
}

fn resolve(raw: RawKeymap) -> impl Iterator<Item = (String, Action)> {
    let registry = ActionRegistry::new();
    raw.bindings
        .into_iter()
        .filter_map(move |(key, action_id)| match registry.find_by_id(&action_id) {
            Some(action) => Some((key, action)),
            None => {
                tracing::debug!("unknown action {action_id:?} bound to {key:?}");
                None
            }
        })
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`.
    ///
    /// The result contains only the bindings listed in the file. Unknown
    /// action strings are ignored.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let raw = read_raw(path)?;
        let bindings: HashMap<String, Action> = resolve(raw).collect();
        let reverse = build_reverse(&bindings);
        Ok(Self { bindings, reverse })
    }

    /// Default bindings with the entries from `path` layered on top.
    ///
    /// A missing file yields the defaults; a malformed one is logged and
    /// ignored.
    pub fn load_or_default(path: &Path) -> Self {
        match read_raw(path) {
            Ok(raw) => Self::default().with_overrides(raw),
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn with_overrides(self, raw: RawKeymap) -> Self {
        let mut bindings = self.bindings;
        bindings.extend(resolve(raw));
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action, shortest first.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }

    /// Returns the key shown for `action` in the help line.
    pub fn primary_key(&self, action: Action) -> Option<&str> {
        self.keys_for_action(action)
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn bindings(&self) -> &HashMap<String, Action> {
        &self.bindings
    }
}

fn read_raw(path: &Path) -> CoreResult<RawKeymap> {
    let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
    toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_keymap_has_navigation_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("Down"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("k"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("Up"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("h"), Some(Action::GoParent));
        assert_eq!(keymap.action_for_key("Backspace"), Some(Action::GoParent));
        assert_eq!(keymap.action_for_key("l"), Some(Action::Enter));
        assert_eq!(keymap.action_for_key("Enter"), Some(Action::Enter));
        assert_eq!(keymap.action_for_key("Ctrl+r"), Some(Action::Refresh));
    }

    #[test]
    fn default_keymap_has_stub_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("c"), Some(Action::Copy));
        assert_eq!(keymap.action_for_key("x"), Some(Action::Cut));
        assert_eq!(keymap.action_for_key("d"), Some(Action::Delete));
        assert_eq!(keymap.action_for_key("r"), Some(Action::Rename));
        assert_eq!(keymap.action_for_key("n"), Some(Action::NewDirectory));
        assert_eq!(keymap.action_for_key("/"), Some(Action::Search));
    }

    #[test]
    fn default_keymap_has_misc_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("."), Some(Action::ToggleHidden));
        assert_eq!(keymap.action_for_key("Esc"), Some(Action::DismissStatus));
        assert_eq!(keymap.action_for_key("q"), Some(Action::Quit));
    }

    #[test]
    fn action_for_unknown_key_returns_none() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("z"), None);
        assert_eq!(keymap.action_for_key(""), None);
        assert_eq!(keymap.action_for_key("Ctrl+x"), None);
    }

    #[test]
    fn load_custom_keymap() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
j = "cursor_up"
k = "cursor_down"
z = "quit"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("k"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("z"), Some(Action::Quit));
        assert_eq!(keymap.action_for_key("h"), None);
    }

    #[test]
    fn load_custom_keymap_ignores_unknown_actions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
j = "cursor_down"
x = "nonexistent_action"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("x"), None);
    }

    #[test]
    fn load_or_default_overlays_file_on_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
w = "cursor_up"
q = "toggle_hidden"
"#,
        )
        .unwrap();

        let keymap = Keymap::load_or_default(&path);
        assert_eq!(keymap.action_for_key("w"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("q"), Some(Action::ToggleHidden));
        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
    }

    #[test]
    fn load_or_default_without_file() {
        let tmp = TempDir::new().unwrap();
        let keymap = Keymap::load_or_default(&tmp.path().join("nope.toml"));
        assert_eq!(keymap.bindings().len(), DEFAULT_BINDINGS.len());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Keymap::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "invalid[[[toml").unwrap();

        let result = Keymap::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn keys_for_action_prefers_short_keys() {
        let keymap = Keymap::default();
        let keys = keymap.keys_for_action(Action::GoParent).unwrap();
        assert_eq!(keys, ["h", "Left", "Backspace"]);
        assert_eq!(keymap.primary_key(Action::Enter), Some("l"));
        assert_eq!(keymap.primary_key(Action::DismissStatus), Some("Esc"));
    }

    #[test]
    fn keys_for_unbound_action_returns_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "[bindings]\nj = \"cursor_down\"").unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert!(keymap.keys_for_action(Action::Quit).is_none());
        assert!(keymap.primary_key(Action::Quit).is_none());
    }
}
