//! Key event translation.
//!
//! Ctrl+C always quits. Every other key is turned into a key name (see
//! [`key_name`]) and resolved through the [`Keymap`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use hito_core::{Command, Keymap};

/// Maps a key event to a core [`Command`], or `None` if the key is unbound.
pub fn handle_key(key: KeyEvent, keymap: &Keymap) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    let name = key_name(key)?;
    keymap.action_for_key(&name).map(Command::from)
}

/// Returns the keymap name for `key`.
///
/// Characters map to themselves (`"j"`, `"."`, `"G"`); Ctrl-chords become
/// `"Ctrl+<char>"`; named keys use their crossterm name (`"Enter"`,
/// `"Backspace"`, `"Esc"`, `"Up"`, ...).
pub fn key_name(key: KeyEvent) -> Option<String> {
    let name = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            format!("Ctrl+{}", c.to_ascii_lowercase())
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        _ => return None,
    };
    Some(name)
}
