//! Application event definitions
//!
//! Background threads (the spawner and the PTY reader) never touch UI state
//! directly; they send `AppEvent`s through an unbounded channel. The sender
//! pairs every send with a repaint request so the UI loop wakes up even when
//! idle.

use tokio::sync::mpsc;

/// Events delivered from background threads onto the UI loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The child process is running on its PTY.
    SessionStarted,

    /// The child process could not be started.
    SpawnFailed(String),

    /// Raw bytes read from the PTY.
    PtyOutput(Vec<u8>),

    /// The child process exited. `None` when the exit status was unavailable.
    ChildExited(Option<i32>),
}

/// Wrapper around `mpsc::UnboundedSender<AppEvent>` that also wakes the UI
/// by requesting a repaint after every send. Cheap to clone; safe to use
/// from any thread.
#[derive(Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<AppEvent>,
    ctx: egui::Context,
}

impl EventSender {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, ctx: egui::Context) -> Self {
        Self { tx, ctx }
    }

    pub fn send(&self, event: AppEvent) -> Result<(), mpsc::error::SendError<AppEvent>> {
        let result = self.tx.send(event);
        self.ctx.request_repaint();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_delivers_event() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let sender = EventSender::new(tx, egui::Context::default());

        sender.send(AppEvent::SessionStarted).unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::SessionStarted)));
    }

    #[test]
    fn test_send_after_receiver_dropped_errors() {
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        let sender = EventSender::new(tx, egui::Context::default());
        assert!(sender.send(AppEvent::ChildExited(Some(0))).is_err());
    }
}
