//! Configuration management for hito.
//!
//! User preferences ([`settings::Config`]), colors ([`theme::Theme`]) and
//! key bindings ([`keymap::Keymap`]) are stored as TOML files in one
//! directory and loaded at startup.

use std::path::{Path, PathBuf};

pub mod keymap;
pub mod settings;
pub mod theme;

/// Returns the directory the TOML files are read from.
///
/// `./config` wins when it exists, otherwise `$HOME/.config/hito`. Falls
/// back to `./config` when no home directory is known.
pub fn default_config_dir() -> PathBuf {
    let local = PathBuf::from("config");
    if local.is_dir() {
        return local;
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".config").join("hito"),
        None => local,
    }
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join("config.toml")
}

pub fn theme_path(dir: &Path) -> PathBuf {
    dir.join("theme.toml")
}

pub fn keymap_path(dir: &Path) -> PathBuf {
    dir.join("keymap.toml")
}
