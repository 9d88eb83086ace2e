//! Window title synchronization
//!
//! Keeps the displayed title consistent with the child process: a
//! terminal-reported title is shown verbatim, and the title reverts to the
//! application name when the child exits or reports an empty title.

/// Application display name, shown whenever no custom title is active.
pub const APP_NAME: &str = "QuickTerm";

/// The title currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayedTitle {
    /// The fixed application name.
    #[default]
    Default,
    /// A title reported by the child through the terminal.
    Custom(String),
}

/// Title state machine.
///
/// Keeps responding to events after a child exit; for this application a
/// session is not restartable, so `on_child_exited` is effectively the last
/// transition a given session will drive.
#[derive(Debug, Default)]
pub struct TitleSync {
    displayed: DisplayedTitle,
}

impl TitleSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// The child reported a new title. Empty titles collapse to the default.
    pub fn on_title_changed(&mut self, title: &str) {
        self.displayed = if title.is_empty() {
            DisplayedTitle::Default
        } else {
            DisplayedTitle::Custom(title.to_string())
        };
    }

    /// The child exited; revert to the default regardless of prior state.
    /// The exit code is observed by the caller but not surfaced here.
    pub fn on_child_exited(&mut self, _code: Option<i32>) {
        self.displayed = DisplayedTitle::Default;
    }

    /// The title text to display right now.
    pub fn current(&self) -> &str {
        match &self.displayed {
            DisplayedTitle::Default => APP_NAME,
            DisplayedTitle::Custom(title) => title,
        }
    }

    pub fn displayed(&self) -> &DisplayedTitle {
        &self.displayed
    }
}
