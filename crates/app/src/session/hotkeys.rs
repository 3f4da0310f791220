//! Global hotkey actions.

use tallypad_keyboard::HotkeyAction;
use tallypad_logger as logger;
use tallypad_theme::{Theme, THEME_NAMES};

use super::EditorSession;

impl EditorSession {
    /// Execute a hotkey action
    pub(super) fn execute_hotkey_action(&mut self, action: HotkeyAction) {
        logger::debug(format!("Hotkey: {:?}", action));

        match action {
            HotkeyAction::InsertExample => self.insert_example(),
            HotkeyAction::Copy => self.copy_to_clipboard(),
            HotkeyAction::Clear => self.clear_text(),
            HotkeyAction::ToggleSound => self.toggle_sound(),
            HotkeyAction::CycleTheme => {
                let next = Theme::next_name(&self.prefs.theme);
                self.set_theme(next);
            }
            HotkeyAction::SelectTheme(index) => {
                if let Some(name) = THEME_NAMES.get(index) {
                    self.set_theme(name);
                }
            }
            HotkeyAction::Quit => {
                logger::info("Quit requested");
                self.should_quit = true;
            }
        }
    }
}
