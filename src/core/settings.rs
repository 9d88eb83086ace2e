//! Persisted application settings
//!
//! Optional user preferences that sit below command-line flags in the
//! configuration resolution order: a default working directory and shell,
//! the font size, and the theme. Stored as TOML under the platform config
//! directory.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default terminal font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum font size.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Maximum font size.
pub const MAX_FONT_SIZE: f32 = 32.0;

/// Persisted settings, all optional with sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Default working directory for new sessions (empty = startup directory).
    #[serde(default)]
    pub working_directory: String,

    /// Default shell to run when no command is given (empty = $SHELL).
    #[serde(default)]
    pub shell: String,

    /// Terminal font size in points.
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    /// Whether to use the dark color scheme.
    #[serde(default = "default_dark_theme")]
    pub dark_theme: bool,
}

fn default_font_size() -> f32 {
    DEFAULT_FONT_SIZE
}

fn default_dark_theme() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            working_directory: String::new(),
            shell: String::new(),
            font_size: default_font_size(),
            dark_theme: default_dark_theme(),
        }
    }
}

impl Settings {
    /// Load settings from file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file: {:?}", path))?;
            let settings: Settings = toml::from_str(&content)
                .with_context(|| format!("Failed to parse settings file: {:?}", path))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create settings directory: {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write settings file: {:?}", path))?;

        Ok(())
    }

    /// Get the settings file path.
    fn settings_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "quickterm", "QuickTerm")
            .context("Failed to determine settings directory")?;
        Ok(proj_dirs.config_dir().join("settings.toml"))
    }

    /// Set font size with clamping to the valid range.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }
}
