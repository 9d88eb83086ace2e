//! PTY output stream parser
//!
//! Feeds raw PTY bytes through a VTE parser to maintain a bounded buffer of
//! display lines and to surface the control sequences the window cares
//! about: OSC 0/2 title changes and the bell. Everything else (colors,
//! cursor movement, alternate screens) is ignored.

use std::collections::VecDeque;
use vte::{Params, Parser, Perform};

/// Maximum number of committed scrollback lines kept for display.
const MAX_SCROLLBACK_LINES: usize = 2000;

/// Events extracted from the output stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// The child set the terminal title (OSC 0 or OSC 2).
    TitleChanged(String),
    /// The child rang the bell.
    Bell,
}

/// Stateful parser over a session's output stream.
pub struct StreamParser {
    parser: Parser,
    lines: VecDeque<String>,
    current: String,
    events: VecDeque<StreamEvent>,
}

impl Default for StreamParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            lines: VecDeque::new(),
            current: String::new(),
            events: VecDeque::new(),
        }
    }

    /// Parse a chunk of PTY output, returning any extracted events.
    ///
    /// Parser state persists across calls, so escape sequences split over
    /// chunk boundaries are handled correctly.
    pub fn feed(&mut self, data: &[u8]) -> Vec<StreamEvent> {
        let mut performer = StreamPerformer {
            lines: &mut self.lines,
            current: &mut self.current,
            events: &mut self.events,
        };

        for byte in data {
            self.parser.advance(&mut performer, *byte);
        }

        self.events.drain(..).collect()
    }

    /// All display lines, committed scrollback first, then the line being
    /// built (the prompt line, typically).
    pub fn display_lines(&self) -> impl Iterator<Item = &str> {
        self.lines
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.current.as_str()))
    }
}

/// VTE `Perform` implementation backing `StreamParser::feed`.
struct StreamPerformer<'a> {
    lines: &'a mut VecDeque<String>,
    current: &'a mut String,
    events: &'a mut VecDeque<StreamEvent>,
}

impl StreamPerformer<'_> {
    fn commit_line(&mut self) {
        self.lines.push_back(std::mem::take(self.current));
        while self.lines.len() > MAX_SCROLLBACK_LINES {
            self.lines.pop_front();
        }
    }
}

impl Perform for StreamPerformer<'_> {
    fn print(&mut self, c: char) {
        self.current.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            // Bell
            0x07 => self.events.push_back(StreamEvent::Bell),
            // Backspace
            0x08 => {
                self.current.pop();
            }
            // Tab
            0x09 => self.current.push_str("    "),
            // Line feed
            0x0A => self.commit_line(),
            // Carriage return: the next prints rewrite the line
            0x0D => self.current.clear(),
            _ => {}
        }
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], _bell_terminated: bool) {
        // OSC 0 (icon + title) and OSC 2 (title). Titles containing ';'
        // arrive split across parameters; rejoin them.
        if params.len() < 2 || !matches!(params[0], b"0" | b"2") {
            return;
        }
        let title = params[1..]
            .iter()
            .map(|part| String::from_utf8_lossy(part))
            .collect::<Vec<_>>()
            .join(";");
        self.events.push_back(StreamEvent::TitleChanged(title));
    }

    fn csi_dispatch(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, action: char) {
        match action {
            // Erase in line
            'K' => self.current.clear(),
            // Erase in display
            'J' => {
                self.lines.clear();
                self.current.clear();
            }
            _ => {}
        }
    }
}
