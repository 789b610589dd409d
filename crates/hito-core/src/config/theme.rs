//! Theme configuration for hito.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Complete theme with per-component color groups.
///
/// A theme is an immutable value handed to the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub preview: PreviewTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
}

impl Theme {
    /// Loads a theme from a TOML file at `path`.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, falling back to the default theme on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(theme) => theme,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// File list colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTheme {
    pub border_fg: String,
    pub title_fg: String,
    pub dir_fg: String,
    pub file_fg: String,
    pub symlink_fg: String,
    pub hidden_fg: String,
    pub parent_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            title_fg: "cyan".to_string(),
            dir_fg: "blue".to_string(),
            file_fg: "reset".to_string(),
            symlink_fg: "cyan".to_string(),
            hidden_fg: "dark_gray".to_string(),
            parent_fg: "dark_gray".to_string(),
        }
    }
}

/// Preview pane colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewTheme {
    pub border_fg: String,
    pub title_fg: String,
    pub dir_title_fg: String,
    pub meta_fg: String,
    pub error_fg: String,
    pub truncation_fg: String,
}

impl Default for PreviewTheme {
    fn default() -> Self {
        Self {
            border_fg: "dark_gray".to_string(),
            title_fg: "white".to_string(),
            dir_title_fg: "blue".to_string(),
            meta_fg: "gray".to_string(),
            error_fg: "red".to_string(),
            truncation_fg: "yellow".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub bg: String,
    pub fg: String,
    pub hidden_fg: String,
    pub message_fg: String,
    pub help_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            fg: "black".to_string(),
            hidden_fg: "yellow".to_string(),
            message_fg: "magenta".to_string(),
            help_fg: "dark_gray".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for anything else.
pub fn parse_color(s: &str) -> Color {
    let lower = s.trim().to_lowercase();
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).unwrap_or(Color::Reset);
    }
    match lower.replace(['_', ' '], "").as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_theme_colors_parse() {
        let theme = Theme::default();
        assert_eq!(parse_color(&theme.panel.dir_fg), Color::Blue);
        assert_eq!(parse_color(&theme.panel.hidden_fg), Color::DarkGray);
        assert_eq!(parse_color(&theme.preview.error_fg), Color::Red);
        assert_eq!(parse_color(&theme.statusbar.bg), Color::White);
        assert_eq!(parse_color(&theme.statusbar.fg), Color::Black);
    }

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("green"), Color::Green);
        assert_eq!(parse_color("yellow"), Color::Yellow);
        assert_eq!(parse_color("cyan"), Color::Cyan);
        assert_eq!(parse_color("magenta"), Color::Magenta);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("black"), Color::Black);
        assert_eq!(parse_color("gray"), Color::Gray);
        assert_eq!(parse_color("reset"), Color::Reset);
    }

    #[test]
    fn parse_color_spelling_variants() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("DARK_GRAY"), Color::DarkGray);
        assert_eq!(parse_color("DarkGrey"), Color::DarkGray);
        assert_eq!(parse_color("light blue"), Color::LightBlue);
        assert_eq!(parse_color("light_magenta"), Color::LightMagenta);
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#00FF00"), Color::Rgb(0, 255, 0));
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
    }

    #[test]
    fn parse_color_invalid_returns_reset() {
        assert_eq!(parse_color("nonexistent"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Reset);
        assert_eq!(parse_color("#fff"), Color::Reset);
    }

    #[test]
    fn load_partial_theme_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(
            &path,
            r##"
[panel]
dir_fg = "#00ff00"

[statusbar]
bg = "black"
"##,
        )
        .unwrap();

        let theme = Theme::load(&path).unwrap();
        assert_eq!(theme.panel.dir_fg, "#00ff00");
        assert_eq!(theme.panel.symlink_fg, "cyan");
        assert_eq!(theme.statusbar.bg, "black");
        assert_eq!(theme.statusbar.fg, "black");
        assert_eq!(theme.preview.error_fg, "red");
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Theme::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_or_default_on_malformed_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("theme.toml");
        fs::write(&path, "[panel\ndir_fg = ").unwrap();

        let theme = Theme::load_or_default(&path);
        assert_eq!(theme.panel.dir_fg, "blue");
    }
}
