//! The single loop that drives the UI thread.
//!
//! All state mutation happens synchronously inside this loop's handler:
//! input events, fetch completions drained from the loader channel, and
//! the redraw on each idle tick. Background fetch threads never touch UI
//! state directly; they only feed the channel this loop drains.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub enum ControlFlow {
    Continue,
    Quit,
}

pub struct EventLoop {
    poll_interval: Duration,
}

impl EventLoop {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Run until the handler asks to quit.
    ///
    /// The handler is called with `Some(event)` for each input event and
    /// with `None` once per poll interval for housekeeping and drawing.
    /// When events arrive the queue is drained before the next draw so
    /// high-frequency bursts (mouse drags, scrolling) do not lag behind
    /// rendering.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(None)? {
                break;
            }

            if event::poll(self.poll_interval)? {
                loop {
                    let next = event::read()?;
                    if let ControlFlow::Quit = handler(Some(next))? {
                        return Ok(());
                    }
                    if !event::poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}
