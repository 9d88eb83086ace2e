//! Session configuration resolution
//!
//! A `SessionConfig` is the complete, immutable description of one terminal
//! session: what to run, where, with which environment, actions, and colors.
//! It is produced exactly once at startup by merging command-line overrides
//! over persisted settings over built-in defaults, and never mutated after.

use crate::core::actions::ActionSpec;
use crate::core::color::Color;
use crate::core::settings::Settings;
use std::path::PathBuf;

/// Foreground/background color pair applied to terminal rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
}

/// Fully resolved configuration for one terminal session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Absolute working directory for the child process.
    pub working_directory: PathBuf,
    /// Argv of the program to run.
    pub command: Vec<String>,
    /// `KEY=VALUE` entries merged over the inherited environment.
    pub environment: Vec<String>,
    /// Quick actions in display order.
    pub actions: Vec<ActionSpec>,
    /// Whether to use the dark color scheme.
    pub dark_theme: bool,
    /// Custom colors; `None` means the built-in defaults.
    pub palette: Option<Palette>,
    /// Terminal font size in points.
    pub font_size: f32,
}

/// Configuration fields gathered from the command line; unset fields fall
/// through to settings-file values and then built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct PartialSessionConfig {
    pub working_directory: Option<PathBuf>,
    pub command: Option<Vec<String>>,
    pub environment: Option<Vec<String>>,
    pub actions: Option<Vec<ActionSpec>>,
    pub dark_theme: Option<bool>,
    pub palette: Option<Palette>,
}

/// The shell to run when no command is configured anywhere.
pub fn default_shell() -> String {
    std::env::var("SHELL").unwrap_or_else(|_| "/bin/bash".to_string())
}

fn default_working_directory(settings: &Settings) -> PathBuf {
    if !settings.working_directory.is_empty() {
        return PathBuf::from(&settings.working_directory);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn default_command(settings: &Settings) -> Vec<String> {
    if !settings.shell.is_empty() {
        return vec![settings.shell.clone()];
    }
    vec![default_shell()]
}

/// Merge command-line overrides over settings and built-in defaults.
///
/// Pure apart from reading the process startup directory and `$SHELL` for
/// the fallback values; deterministic given its inputs.
pub fn resolve(partial: PartialSessionConfig, settings: &Settings) -> SessionConfig {
    SessionConfig {
        working_directory: partial
            .working_directory
            .unwrap_or_else(|| default_working_directory(settings)),
        command: partial.command.unwrap_or_else(|| default_command(settings)),
        environment: partial.environment.unwrap_or_default(),
        actions: partial.actions.unwrap_or_default(),
        dark_theme: partial.dark_theme.unwrap_or(settings.dark_theme),
        palette: partial.palette,
        font_size: settings.font_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::parse_color;
    use crate::core::settings::DEFAULT_FONT_SIZE;

    #[test]
    fn test_resolve_empty_partial_yields_defaults() {
        let config = resolve(PartialSessionConfig::default(), &Settings::default());

        let startup_dir = std::env::current_dir().unwrap();
        assert_eq!(config.working_directory, startup_dir);
        assert_eq!(config.command, vec![default_shell()]);
        assert!(config.environment.is_empty());
        assert!(config.actions.is_empty());
        assert!(config.dark_theme);
        assert!(config.palette.is_none());
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_resolve_prefers_partial_over_settings() {
        let settings = Settings {
            working_directory: "/srv/settings-dir".to_string(),
            shell: "/bin/dash".to_string(),
            font_size: 11.0,
            dark_theme: true,
        };
        let partial = PartialSessionConfig {
            working_directory: Some(PathBuf::from("/tmp/cli-dir")),
            command: Some(vec!["htop".to_string()]),
            dark_theme: Some(false),
            ..Default::default()
        };

        let config = resolve(partial, &settings);
        assert_eq!(config.working_directory, PathBuf::from("/tmp/cli-dir"));
        assert_eq!(config.command, vec!["htop".to_string()]);
        assert!(!config.dark_theme);
        assert_eq!(config.font_size, 11.0);
    }

    #[test]
    fn test_resolve_falls_back_to_settings() {
        let settings = Settings {
            working_directory: "/srv/settings-dir".to_string(),
            shell: "/bin/dash".to_string(),
            ..Default::default()
        };

        let config = resolve(PartialSessionConfig::default(), &settings);
        assert_eq!(config.working_directory, PathBuf::from("/srv/settings-dir"));
        assert_eq!(config.command, vec!["/bin/dash".to_string()]);
        assert!(config.dark_theme);
    }

    #[test]
    fn test_resolve_keeps_palette_and_environment() {
        let palette = Palette {
            foreground: parse_color("#ffffff").unwrap(),
            background: parse_color("#000000").unwrap(),
        };
        let partial = PartialSessionConfig {
            environment: Some(vec!["A=1".to_string(), "B=2".to_string()]),
            palette: Some(palette),
            ..Default::default()
        };

        let config = resolve(partial, &Settings::default());
        assert_eq!(config.environment, vec!["A=1", "B=2"]);
        assert_eq!(config.palette, Some(palette));
    }
}
