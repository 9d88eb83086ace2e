//! Command-line interface
//!
//! Flag definitions and their conversion into a `PartialSessionConfig`.
//! Structural errors (unknown flags, missing values) are rejected by clap
//! with a usage message before any window exists; value-level problems are
//! handled per field (see `ColorParseError` handling on `--palette`).

use crate::core::actions::parse_actions;
use crate::core::color::parse_color;
use crate::core::config::{Palette, PartialSessionConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

/// Command-line flags for a terminal session.
#[derive(Debug, Parser)]
#[command(name = "quickterm", version, about = "A minimal terminal window with quick-action buttons")]
pub struct Cli {
    /// Set the initial working directory
    #[arg(short = 'w', long)]
    pub cwd: Option<String>,

    /// Set the command to execute (shell-word tokenized)
    #[arg(short = 'c', long)]
    pub command: Option<String>,

    /// Set environment variables as space-separated KEY=VALUE entries
    #[arg(short = 'e', long)]
    pub env: Option<String>,

    /// Set the quick actions ("tooltip:icon:command,tooltip:command,...")
    #[arg(short = 'a', long)]
    pub actions: Option<String>,

    /// Use the light color scheme
    #[arg(short = 'd', long = "light-theme")]
    pub light_theme: bool,

    /// Set the palette as two color literals "FOREGROUND BACKGROUND"
    #[arg(short = 'p', long)]
    pub palette: Option<String>,
}

impl Cli {
    /// Convert parsed flags into a partial configuration.
    ///
    /// Fails only on an unlexable `--command` value; everything else either
    /// parses or falls back per its documented policy.
    pub fn into_partial_config(self) -> Result<PartialSessionConfig> {
        let mut partial = PartialSessionConfig::default();

        if let Some(cwd) = self.cwd {
            partial.working_directory = Some(expand_tilde(&cwd));
        }

        if let Some(command) = self.command {
            let argv = shell_words::split(&command)
                .with_context(|| format!("Failed to tokenize command: {:?}", command))?;
            // An all-whitespace value tokenizes to nothing; treat it as unset
            // so the default shell applies.
            if !argv.is_empty() {
                partial.command = Some(argv);
            }
        }

        if let Some(env) = self.env {
            // Plain single-space splitting, no quoting. Empty tokens from
            // repeated spaces can never be KEY=VALUE entries; drop them.
            let entries: Vec<String> = env
                .split(' ')
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect();
            partial.environment = Some(entries);
        }

        if let Some(actions) = self.actions {
            partial.actions = Some(parse_actions(&actions));
        }

        if self.light_theme {
            partial.dark_theme = Some(false);
        }

        if let Some(palette) = self.palette {
            partial.palette = parse_palette(&palette);
        }

        Ok(partial)
    }
}

/// Parse a "FOREGROUND BACKGROUND" palette argument.
///
/// Fewer than two tokens leaves the palette unset. A token that fails color
/// parsing logs a warning and leaves the palette unset as well, so startup
/// continues with the built-in colors.
fn parse_palette(raw: &str) -> Option<Palette> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 2 {
        return None;
    }

    let foreground = match parse_color(tokens[0]) {
        Ok(color) => color,
        Err(e) => {
            warn!("Ignoring palette, falling back to default colors: {}", e);
            return None;
        }
    };
    let background = match parse_color(tokens[1]) {
        Ok(color) => color,
        Err(e) => {
            warn!("Ignoring palette, falling back to default colors: {}", e);
            return None;
        }
    };

    Some(Palette {
        foreground,
        background,
    })
}

fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from(path));
    }
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
