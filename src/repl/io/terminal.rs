//! crossterm-backed streams used by the binary

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Keyboard and resize events from the controlling terminal
pub struct TerminalEventStream;

impl EventStream for TerminalEventStream {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(event::read()?)
    }
}

/// Screen output on stdout
pub struct TerminalRenderStream {
    stdout: Stdout,
}

impl TerminalRenderStream {
    pub fn stdout() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Write for TerminalRenderStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl RenderStream for TerminalRenderStream {
    fn size(&self) -> Result<TerminalSize> {
        Ok(terminal::size()?)
    }

    fn begin_session(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide)?;
        Ok(())
    }

    fn end_session(&mut self) -> Result<()> {
        // Leave the alternate screen even if raw mode cannot be reset
        let screen = execute!(self.stdout, cursor::Show, LeaveAlternateScreen);
        terminal::disable_raw_mode()?;
        Ok(screen?)
    }

    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All))?;
        Ok(())
    }
}
