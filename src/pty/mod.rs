//! PTY module - child process spawning and session handles

mod launcher;

pub use launcher::{PtySession, SessionLauncher};
