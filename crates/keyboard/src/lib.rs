//! Global hotkeys for tallypad.
//!
//! The hotkey processor turns a key event into a [`HotkeyAction`] before the
//! text area ever sees it, so a bound combination is consumed and never
//! inserted as text.
//!
//! ```text
//! KeyEvent → HotkeyProcessor → Option<HotkeyAction> → EditorSession
//! ```

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key and its modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create an Alt+key binding.
    pub fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Create a Ctrl+key binding.
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Binding for `key` with letter case and Shift folded away.
    pub fn normalized(key: &KeyEvent) -> Self {
        let code = match key.code {
            KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
            other => other,
        };
        Self::new(code, key.modifiers.difference(KeyModifiers::SHIFT))
    }
}

/// Actions that can be triggered by hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Append the example paragraph
    InsertExample,
    /// Copy the whole document
    Copy,
    /// Clear the document (asks first if it has content)
    Clear,
    /// Flip the sound preference
    ToggleSound,
    /// Switch to the next theme
    CycleTheme,
    /// Switch to the theme at this position (0-based)
    SelectTheme(usize),
    /// Leave the application
    Quit,
}

/// Trait for processing global hotkeys.
pub trait HotkeyProcessor {
    /// Returns the action bound to `key`, or `None` if the key belongs to
    /// the text area.
    fn process_hotkey(&self, key: &KeyEvent) -> Option<HotkeyAction>;
}

/// Default hotkey processor.
#[derive(Debug, Clone)]
pub struct DefaultHotkeyProcessor {
    bindings: HashMap<KeyBinding, HotkeyAction>,
}

impl Default for DefaultHotkeyProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultHotkeyProcessor {
    /// Create a processor with the standard bindings.
    ///
    /// `theme_count` limits how many Alt+digit theme shortcuts exist.
    pub fn with_theme_count(theme_count: usize) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            KeyBinding::alt(KeyCode::Char('e')),
            HotkeyAction::InsertExample,
        );
        bindings.insert(KeyBinding::alt(KeyCode::Char('c')), HotkeyAction::Copy);
        bindings.insert(KeyBinding::alt(KeyCode::Char('r')), HotkeyAction::Clear);
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('s')),
            HotkeyAction::ToggleSound,
        );
        bindings.insert(
            KeyBinding::alt(KeyCode::Char('t')),
            HotkeyAction::CycleTheme,
        );
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('q')), HotkeyAction::Quit);

        for i in 0..theme_count.min(9) {
            bindings.insert(
                KeyBinding::alt(KeyCode::Char((b'1' + i as u8) as char)),
                HotkeyAction::SelectTheme(i),
            );
        }

        Self { bindings }
    }

    /// Processor for the three built-in themes.
    pub fn new() -> Self {
        Self::with_theme_count(3)
    }
}

impl HotkeyProcessor for DefaultHotkeyProcessor {
    fn process_hotkey(&self, key: &KeyEvent) -> Option<HotkeyAction> {
        if !key
            .modifiers
            .intersects(KeyModifiers::ALT | KeyModifiers::CONTROL)
        {
            return None;
        }

        self.bindings.get(&KeyBinding::normalized(key)).copied()
    }
}
