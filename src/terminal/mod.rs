//! Terminal adapter
//!
//! This module is the boundary to the external terminal-emulation concern:
//! - `TerminalSession`: the capability interface the UI depends on for
//!   injecting commands into a live session.
//! - `StreamParser`: a vte-based adapter that turns raw PTY bytes into
//!   display lines and title-change events. Escape-sequence handling beyond
//!   that is deliberately out of scope.

mod parser;

pub use parser::{StreamEvent, StreamParser};

/// Capability interface over a live terminal session.
///
/// Implemented by the PTY-backed session; the header-bar action buttons and
/// anything else that writes into the session depend only on this trait.
pub trait TerminalSession {
    /// Inject a command line (text plus trailing newline) into the
    /// session's input stream. A no-op when the session is not running.
    fn inject(&self, text: &str);

    /// Whether the child process is currently running.
    fn is_running(&self) -> bool;
}
