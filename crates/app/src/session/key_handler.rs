//! Event handling for the editor session.
//!
//! Keys go to the open modal first, then to the hotkey table, and only then
//! to the document.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tallypad_core::{Event, InputEvent};
use tallypad_keyboard::HotkeyProcessor;
use tallypad_logger as logger;
use tallypad_modal::{ActiveModal, Modal, ModalResult};

use super::EditorSession;

impl EditorSession {
    /// Handle one application event.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key_event(key)?,
            Event::Paste(text) => self.handle_paste(&text),
            Event::Resize(..) | Event::FocusGained => self.needs_redraw = true,
            Event::Tick => self.on_tick(),
        }
        Ok(())
    }

    /// Handle keyboard event
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        logger::debug(format!(
            "Key event: code={:?}, modifiers={:?}",
            key.code, key.modifiers
        ));

        if self.active_modal.is_some() {
            return self.handle_modal_key(key);
        }

        if let Some(action) = self.hotkeys.process_hotkey(&key) {
            self.execute_hotkey_action(action);
            return Ok(());
        }

        self.handle_edit_key(key);
        Ok(())
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(modal) = self.active_modal.as_mut() else {
            return Ok(());
        };

        let result = match modal {
            ActiveModal::Confirm(m) => m.handle_key(key)?,
        };
        self.needs_redraw = true;

        let Some(result) = result else {
            return Ok(());
        };

        self.active_modal = None;
        let pending = self.pending_action.take();
        if let (ModalResult::Confirmed(true), Some(action)) = (result, pending) {
            self.run_confirmed(action);
        }
        Ok(())
    }

    /// Apply a key to the document. Keys with Ctrl or Alt held are ignored.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }

        let edit = match key.code {
            KeyCode::Char(c) => {
                self.text.insert_char(c);
                Some(InputEvent::Insert)
            }
            KeyCode::Enter => {
                self.text.insert_char('\n');
                Some(InputEvent::Other)
            }
            KeyCode::Backspace => self
                .text
                .delete_backward()
                .then_some(InputEvent::DeleteBackward),
            KeyCode::Delete => self.text.delete_forward().then_some(InputEvent::Other),
            code => {
                self.move_cursor(code);
                None
            }
        };

        if let Some(event) = edit {
            self.apply_input(event);
        }
    }

    fn move_cursor(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.text.move_left(),
            KeyCode::Right => self.text.move_right(),
            KeyCode::Up => self.text.move_up(),
            KeyCode::Down => self.text.move_down(),
            KeyCode::Home => self.text.move_home(),
            KeyCode::End => self.text.move_end(),
            _ => return,
        }
        self.needs_redraw = true;
    }

    /// Insert pasted text. Ignored while a modal is open.
    pub fn handle_paste(&mut self, text: &str) {
        if self.active_modal.is_some() || text.is_empty() {
            return;
        }
        self.text.insert_str(text);
        self.apply_input(InputEvent::Other);
    }
}
