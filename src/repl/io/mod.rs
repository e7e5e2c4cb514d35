//! # Terminal I/O
//!
//! The controller reads keys from an [`EventStream`]; the renderer draws into
//! a [`RenderStream`]. The binary plugs in crossterm, tests plug in the
//! in-memory streams from [`mock`].

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// (columns, rows)
pub type TerminalSize = (u16, u16);

/// Source of key and resize events
pub trait EventStream {
    /// Wait up to `timeout` for an event to become readable
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Take the next event; only valid after `poll` returned true
    fn read(&mut self) -> Result<Event>;

    /// True once no further event can arrive. A live terminal never runs dry.
    fn is_exhausted(&self) -> bool {
        false
    }
}

/// Drawing target for the calculator screen.
///
/// Frame content is written as crossterm commands through [`Write`]; the
/// trait only adds what cannot be expressed that way.
pub trait RenderStream: Write {
    fn size(&self) -> Result<TerminalSize>;

    /// Take over the screen: raw mode, alternate screen, hidden cursor
    fn begin_session(&mut self) -> Result<()>;

    /// Hand the screen back in the state `begin_session` found it
    fn end_session(&mut self) -> Result<()>;

    /// Wipe everything before a full frame
    fn clear_screen(&mut self) -> Result<()>;
}
