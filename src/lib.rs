//! QuickTerm
//!
//! A minimal desktop terminal window with configurable quick-action
//! buttons.
//!
//! # Features
//! - Launches a command (or the default shell) on a pseudo-terminal
//! - Header-bar buttons that inject configured commands into the session
//! - Window title follows the child's terminal title and exit
//! - Session configured via CLI flags over a persisted settings file

pub mod core;
pub mod pty;
pub mod terminal;
pub mod window;

pub use crate::core::actions::{parse_actions, ActionSpec, DEFAULT_ACTION_ICON};
pub use crate::core::cli::Cli;
pub use crate::core::color::{parse_color, Color, ColorParseError};
pub use crate::core::config::{resolve, Palette, PartialSessionConfig, SessionConfig};
pub use crate::core::settings::Settings;
pub use crate::core::title::{DisplayedTitle, TitleSync, APP_NAME};
pub use crate::pty::{PtySession, SessionLauncher};
pub use crate::terminal::{StreamEvent, StreamParser, TerminalSession};
