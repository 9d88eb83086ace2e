//! PTY session launcher
//!
//! Spawns the configured command on a freshly allocated pseudo-terminal.
//! The spawn happens on a background thread so the caller returns
//! immediately; the same thread then becomes the reader loop, forwarding
//! PTY output and the child's exit code as application events.

use crate::core::config::SessionConfig;
use crate::core::events::{AppEvent, EventSender};
use crate::terminal::TerminalSession;
use anyhow::{Context, Result};
use parking_lot::Mutex;
use portable_pty::{native_pty_system, Child, CommandBuilder, MasterPty, PtySize};
use std::io::{Read, Write};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A terminal session bound to a PTY.
///
/// The handle is created in a not-yet-running state and becomes live once
/// the background spawn completes. After the child exits it stays around as
/// an inert handle: `inject` turns into a no-op rather than an error.
pub struct PtySession {
    /// PTY master handle, kept for resizing.
    master: Arc<Mutex<Option<Box<dyn MasterPty + Send>>>>,
    /// Writer to the PTY input stream.
    writer: Arc<Mutex<Option<Box<dyn Write + Send>>>>,
    /// Whether the child process is running.
    running: Arc<Mutex<bool>>,
}

impl Default for PtySession {
    fn default() -> Self {
        Self {
            master: Arc::new(Mutex::new(None)),
            writer: Arc::new(Mutex::new(None)),
            running: Arc::new(Mutex::new(false)),
        }
    }
}

impl PtySession {
    /// Inject a command line into the session's input stream.
    ///
    /// Appends a newline so the shell executes the text. Safe to call at
    /// any point in the session's lifetime; when the session is not (or no
    /// longer) running the bytes are silently discarded.
    pub fn inject(&self, text: &str) {
        if !*self.running.lock() {
            debug!("Discarding injected command, session not running");
            return;
        }

        let mut writer_guard = self.writer.lock();
        let Some(writer) = writer_guard.as_mut() else {
            return;
        };
        if let Err(e) = write_line(writer.as_mut(), text) {
            debug!("Discarding injected command, PTY writer gone: {}", e);
        }
    }

    /// Whether the child process is currently running.
    pub fn is_running(&self) -> bool {
        *self.running.lock()
    }

    /// Resize the PTY to the given grid.
    pub fn resize(&self, rows: u16, cols: u16) {
        let master_guard = self.master.lock();
        if let Some(ref master) = *master_guard {
            if let Err(e) = master.resize(PtySize {
                rows,
                cols,
                pixel_width: 0,
                pixel_height: 0,
            }) {
                warn!("Failed to resize PTY: {}", e);
            }
        }
    }
}

impl TerminalSession for PtySession {
    fn inject(&self, text: &str) {
        PtySession::inject(self, text);
    }

    fn is_running(&self) -> bool {
        PtySession::is_running(self)
    }
}

fn write_line(writer: &mut dyn Write, text: &str) -> std::io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}

/// Launches sessions described by a [`SessionConfig`].
pub struct SessionLauncher;

impl SessionLauncher {
    /// Start the configured command on a new PTY.
    ///
    /// Returns immediately with the session handle; PTY allocation and the
    /// child spawn run on a background thread. The outcome arrives on the
    /// event channel: `SessionStarted` or `SpawnFailed`, followed (for a
    /// live session) by `PtyOutput` chunks and a final `ChildExited`.
    pub fn spawn(config: &SessionConfig, events: EventSender) -> PtySession {
        let session = PtySession::default();
        let master = Arc::clone(&session.master);
        let writer = Arc::clone(&session.writer);
        let running = Arc::clone(&session.running);
        let config = config.clone();

        std::thread::spawn(move || {
            let (reader, child) = match open_and_spawn(&config, &master, &writer, &running) {
                Ok(started) => started,
                Err(e) => {
                    error!("Failed to start session: {:#}", e);
                    let _ = events.send(AppEvent::SpawnFailed(format!("{:#}", e)));
                    return;
                }
            };

            info!(
                "Started {:?} in {:?}",
                config.command, config.working_directory
            );
            let _ = events.send(AppEvent::SessionStarted);

            let exit_code = read_until_exit(reader, child, &events);

            *running.lock() = false;
            *writer.lock() = None;
            let _ = events.send(AppEvent::ChildExited(exit_code));
        });

        session
    }
}

type SessionHandles = (Box<dyn Read + Send>, Box<dyn Child + Send + Sync>);

fn open_and_spawn(
    config: &SessionConfig,
    master: &Mutex<Option<Box<dyn MasterPty + Send>>>,
    writer: &Mutex<Option<Box<dyn Write + Send>>>,
    running: &Mutex<bool>,
) -> Result<SessionHandles> {
    let pty_system = native_pty_system();
    let pair = pty_system
        .openpty(PtySize {
            rows: 24,
            cols: 80,
            pixel_width: 0,
            pixel_height: 0,
        })
        .context("Failed to create PTY")?;

    let program = config.command.first().context("No command configured")?;
    let mut cmd = CommandBuilder::new(program);
    cmd.args(&config.command[1..]);
    cmd.cwd(&config.working_directory);

    // Configured entries overlay the inherited environment.
    cmd.env("TERM", "xterm-256color");
    cmd.env("COLORTERM", "truecolor");
    for entry in &config.environment {
        match entry.split_once('=') {
            Some((key, value)) => cmd.env(key, value),
            None => warn!("Skipping malformed environment entry: {:?}", entry),
        }
    }

    let child = pair
        .slave
        .spawn_command(cmd)
        .context("Failed to spawn child process")?;

    let pty_writer = pair
        .master
        .take_writer()
        .context("Failed to get PTY writer")?;
    let reader = pair
        .master
        .try_clone_reader()
        .context("Failed to get PTY reader")?;

    *writer.lock() = Some(pty_writer);
    *master.lock() = Some(pair.master);
    *running.lock() = true;

    Ok((reader, child))
}

/// Forward PTY output until EOF, then reap the child and return its exit
/// code (`None` when the status could not be collected).
fn read_until_exit(
    mut reader: Box<dyn Read + Send>,
    mut child: Box<dyn Child + Send + Sync>,
    events: &EventSender,
) -> Option<i32> {
    let mut buffer = [0u8; 4096];

    loop {
        match reader.read(&mut buffer) {
            Ok(0) => {
                debug!("PTY EOF");
                break;
            }
            Ok(n) => {
                let _ = events.send(AppEvent::PtyOutput(buffer[..n].to_vec()));
            }
            Err(e) => {
                if e.kind() != std::io::ErrorKind::Interrupted {
                    warn!("PTY read error: {}", e);
                    break;
                }
            }
        }
    }

    match child.wait() {
        Ok(status) => {
            info!("Child exited with status: {:?}", status);
            Some(status.exit_code() as i32)
        }
        Err(e) => {
            error!("Failed to wait for child: {}", e);
            None
        }
    }
}
