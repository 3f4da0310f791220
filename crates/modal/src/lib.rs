//! Modal dialogs for tallypad.
//!
//! While a modal is open it receives every key event; the editor underneath
//! is left untouched until the modal returns a [`ModalResult`].

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use tallypad_theme::Theme;

pub mod confirm;
pub mod layout;

pub use confirm::ConfirmModal;
pub use layout::{calculate_modal_width, centered_rect_with_size, max_line_width};

/// Modal window result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a value
    Confirmed(T),
    /// User closed the modal without choosing
    Cancelled,
}

/// Active modal window.
#[derive(Debug)]
pub enum ActiveModal {
    /// Confirmation modal (Yes/No)
    Confirm(Box<ConfirmModal>),
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window centered in `area`.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;
}
