//! In-memory streams for driving the calculator without a terminal

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::{anyhow, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

/// Replays a fixed queue of events, then reports exhaustion
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into(),
        }
    }

    /// Unmodified presses of each key in order
    pub fn from_keys<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = KeyCode>,
    {
        Self::new(
            codes
                .into_iter()
                .map(|code| Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
                .collect(),
        )
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow!("event queue is empty"))
    }

    fn is_exhausted(&self) -> bool {
        self.events.is_empty()
    }
}

/// Captures what would have reached the screen.
///
/// `output` holds the bytes written since the last full clear, escape
/// sequences included, so assertions look for drawn fragments such as
/// `" 10 │"`.
pub struct MockRenderStream {
    size: TerminalSize,
    output: Vec<u8>,
    clear_count: usize,
    sessions_started: usize,
    in_session: bool,
}

impl MockRenderStream {
    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            size,
            output: Vec::new(),
            clear_count: 0,
            sessions_started: 0,
            in_session: false,
        }
    }

    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Full-screen clears so far, one per full redraw
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    pub fn sessions_started(&self) -> usize {
        self.sessions_started
    }

    /// Whether the screen is currently taken over
    pub fn in_session(&self) -> bool {
        self.in_session
    }
}

impl Default for MockRenderStream {
    /// An 80x24 screen
    fn default() -> Self {
        Self::with_size((80, 24))
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn size(&self) -> Result<TerminalSize> {
        Ok(self.size)
    }

    fn begin_session(&mut self) -> Result<()> {
        self.sessions_started += 1;
        self.in_session = true;
        Ok(())
    }

    fn end_session(&mut self) -> Result<()> {
        self.in_session = false;
        Ok(())
    }

    fn clear_screen(&mut self) -> Result<()> {
        self.clear_count += 1;
        self.output.clear();
        Ok(())
    }
}
