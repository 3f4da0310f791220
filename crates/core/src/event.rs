//! Event types for tallypad.
//!
//! This module provides:
//! - `Event` - Application-level events (keyboard, paste, resize, tick)
//! - `EventHandler` - Polling for terminal events
//! - `ConfirmAction` - What a confirmation dialog will do when accepted

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

/// Application event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Bracketed paste
    Paste(String),
    /// Terminal resize event
    Resize(u16, u16),
    /// Tick event (timers and background results)
    Tick,
    /// Terminal focus gained event
    FocusGained,
}

/// Event handler for polling terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create new event handler with specified tick rate
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Wait for next event, at most one tick.
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            Ok(Self::convert(event::read()?))
        } else {
            Ok(Event::Tick)
        }
    }

    fn convert(event: CrosstermEvent) -> Event {
        match event {
            // With the kitty keyboard protocol Release and Repeat arrive too;
            // only Press should edit text.
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
            CrosstermEvent::Paste(text) => Event::Paste(text),
            CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
            CrosstermEvent::FocusGained => Event::FocusGained,
            _ => Event::Tick,
        }
    }
}

/// Confirmation dialog actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Empty the document
    ClearText,
}
