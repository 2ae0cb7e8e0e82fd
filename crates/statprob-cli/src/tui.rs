//! Minimal terminal application runner
//!
//! Applications implement [`App`] and are driven by [`run`]: the screen is
//! redrawn whenever a terminal event (key input, resize, ...) has been
//! handled, and the loop blocks on input otherwise.

use std::io;

use crossterm::event::{self, Event};
use ratatui::Frame;

/// Trait for TUI applications executed by [`run`].
pub(crate) trait App {
    /// Returns whether the application should exit.
    fn should_exit(&self) -> bool;

    /// Handles terminal events (key input, mouse, resize, etc.).
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen.
    fn draw(&self, frame: &mut Frame);
}

/// Event loop state.
#[derive(Debug)]
struct EventLoop {
    dirty: bool,
}

impl EventLoop {
    fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    fn next_event(&mut self) -> io::Result<Event> {
        let event = event::read()?;
        self.dirty = true;
        Ok(event)
    }
}

/// Runs the application until [`App::should_exit`] returns true.
///
/// The terminal is restored on return, including when an I/O error ends the loop.
pub(crate) fn run<A>(app: &mut A) -> io::Result<()>
where
    A: App,
{
    let mut events = EventLoop::new();
    ratatui::run(|terminal| {
        while !app.should_exit() {
            if events.take_dirty() {
                terminal.draw(|f| app.draw(f))?;
            }
            let event = events.next_event()?;
            app.handle_event(&event);
        }
        Ok(())
    })
}
