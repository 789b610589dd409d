//! Application configuration loaded from a TOML file.
//!
//! Every field has a default, so hito works without a config file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::fs::preview::PreviewLimits;

/// Top-level application configuration.
///
/// Call [`Config::load`] to read from a TOML path, or
/// [`Config::load_or_default`] to fall back silently on a missing file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(e, path))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Loads `path`, falling back to defaults on any error.
    ///
    /// A missing file is expected; other failures are logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(CoreError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }
}

/// General file-browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub show_hidden: bool,
    /// Prepend a `..` entry to every non-root listing.
    #[serde(default = "default_true")]
    pub show_parent_entry: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_parent_entry: true,
        }
    }
}

/// File preview pane configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,
    /// Soft-wrap preview lines to the pane width.
    #[serde(default = "default_true")]
    pub wrap: bool,
}

impl PreviewConfig {
    pub fn limits(&self) -> PreviewLimits {
        PreviewLimits {
            max_bytes: self.max_bytes,
            max_lines: self.max_lines,
            max_line_width: self.max_line_width,
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
            max_lines: default_max_lines(),
            max_line_width: default_max_line_width(),
            wrap: true,
        }
    }
}

/// UI layout and display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Fraction of the width given to the file list.
    #[serde(default = "default_panel_ratio")]
    pub panel_ratio: f64,
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// `strftime`-style format for timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            panel_ratio: default_panel_ratio(),
            show_icons: true,
            date_format: default_date_format(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_bytes() -> usize {
    PreviewLimits::default().max_bytes
}

fn default_max_lines() -> usize {
    PreviewLimits::default().max_lines
}

fn default_max_line_width() -> usize {
    PreviewLimits::default().max_line_width
}

fn default_panel_ratio() -> f64 {
    0.5
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
