//! Main application loop.

use std::time::Duration;

use anyhow::Result;
use ratatui::{backend::Backend, Frame, Terminal};

use tallypad_core::EventHandler;
use tallypad_logger as logger;

use crate::EditorSession;

/// Main application
pub struct App {
    session: EditorSession,
    event_handler: EventHandler,
}

impl App {
    /// Create an application around `session`, ticking every `tick_rate`.
    pub fn new(session: EditorSession, tick_rate: Duration) -> Self {
        Self {
            session,
            event_handler: EventHandler::new(tick_rate),
        }
    }

    /// Run the main application loop
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        render_fn: impl Fn(&mut Frame<'_>, &mut EditorSession),
    ) -> Result<()> {
        while !self.session.should_quit {
            // Render UI only when needed
            if self.session.needs_redraw {
                terminal.draw(|frame| render_fn(frame, &mut self.session))?;
                self.session.needs_redraw = false;
            }

            let event = self.event_handler.next()?;
            self.session.handle_event(event)?;
        }

        logger::info("Application stopped");
        Ok(())
    }
}
