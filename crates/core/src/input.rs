//! Input classification.
//!
//! Every edit to the document is described by an [`InputEvent`]; [`dispatch`]
//! decides what the editor does in response. Only typing a single character
//! or deleting backward produces a key sound; pastes, line breaks, forward
//! deletes and programmatic edits only recount.

/// Kind of edit applied to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// One character typed
    Insert,
    /// Backspace
    DeleteBackward,
    /// Anything else: paste, line break, forward delete, example text, clear
    Other,
}

/// Editor reaction to an [`InputEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Recompute metrics
    Recount,
    /// Recompute metrics and play a key sound (if sound is enabled)
    RecountWithKeySound,
}

impl Action {
    pub fn plays_key_sound(self) -> bool {
        matches!(self, Action::RecountWithKeySound)
    }
}

pub fn dispatch(event: InputEvent) -> Action {
    match event {
        InputEvent::Insert | InputEvent::DeleteBackward => Action::RecountWithKeySound,
        InputEvent::Other => Action::Recount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace_play_sound() {
        assert_eq!(dispatch(InputEvent::Insert), Action::RecountWithKeySound);
        assert_eq!(
            dispatch(InputEvent::DeleteBackward),
            Action::RecountWithKeySound
        );
        assert!(dispatch(InputEvent::Insert).plays_key_sound());
    }

    #[test]
    fn test_other_edits_only_recount() {
        assert_eq!(dispatch(InputEvent::Other), Action::Recount);
        assert!(!dispatch(InputEvent::Other).plays_key_sound());
    }
}
