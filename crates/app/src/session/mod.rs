//! The editor session.
//!
//! [`EditorSession`] owns everything the application mutates: the document,
//! its metrics, the user preferences and the services they talk to. Every
//! handler takes the session by `&mut`; there is no other shared state.

use tallypad_clipboard::ClipboardWriter;
use tallypad_config::{PreferenceStore, SOUND_ENABLED_KEY, THEME_KEY};
use tallypad_core::{
    dispatch, Clock, ConfirmAction, InputEvent, Metrics, Notification, NotificationCenter,
    NotificationKind, NotificationTask, Scheduler,
};
use tallypad_i18n as i18n;
use tallypad_keyboard::DefaultHotkeyProcessor;
use tallypad_logger as logger;
use tallypad_modal::{ActiveModal, ConfirmModal};
use tallypad_sound::KeySound;
use tallypad_theme::{Theme, DEFAULT_THEME, THEME_NAMES};

use crate::text_area::TextArea;

mod hotkeys;
mod key_handler;

/// Settings the user toggles at runtime and that survive restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub sound_enabled: bool,
    pub theme: String,
}

/// Counter texts, already localized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterLabels {
    pub characters: String,
    pub words: String,
    pub lines: String,
    /// Highlight the character counter
    pub active: bool,
}

/// One entry of the theme bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeChoice {
    pub name: &'static str,
    pub active: bool,
}

pub struct EditorSession {
    text: TextArea,
    metrics: Metrics,
    prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    clipboard: Box<dyn ClipboardWriter>,
    sound: Box<dyn KeySound>,
    scheduler: Scheduler<NotificationTask>,
    notifications: NotificationCenter,
    active_modal: Option<ActiveModal>,
    pending_action: Option<ConfirmAction>,
    theme: &'static Theme,
    hotkeys: DefaultHotkeyProcessor,
    /// Should application quit
    pub should_quit: bool,
    /// Flag indicating UI needs to be redrawn
    pub needs_redraw: bool,
}

impl EditorSession {
    /// Create a session, restoring preferences from `store`.
    ///
    /// A missing or unknown stored theme falls back to `default_theme`, and
    /// a `default_theme` outside the theme bar falls back to [`DEFAULT_THEME`].
    /// The sound flag is written back once so the store always holds it.
    pub fn new(
        store: Box<dyn PreferenceStore>,
        clipboard: Box<dyn ClipboardWriter>,
        sound: Box<dyn KeySound>,
        clock: impl Clock + 'static,
        default_theme: &str,
    ) -> Self {
        let stored_theme = store.get(THEME_KEY).filter(|name| Theme::is_builtin(name));
        let theme = Theme::get_by_name(
            stored_theme
                .as_deref()
                .unwrap_or_else(|| builtin_or_default(default_theme)),
        );
        let sound_enabled = store.get(SOUND_ENABLED_KEY).as_deref() == Some("true");

        let mut session = Self {
            text: TextArea::new(),
            metrics: Metrics::default(),
            prefs: Preferences {
                sound_enabled,
                theme: theme.name.to_string(),
            },
            store,
            clipboard,
            sound,
            scheduler: Scheduler::new(clock),
            notifications: NotificationCenter::new(),
            active_modal: None,
            pending_action: None,
            theme,
            hotkeys: DefaultHotkeyProcessor::with_theme_count(THEME_NAMES.len()),
            should_quit: false,
            needs_redraw: true,
        };

        session.persist(SOUND_ENABLED_KEY, bool_str(sound_enabled));
        logger::info(format!(
            "Session started: theme={}, sound={}",
            session.prefs.theme, session.prefs.sound_enabled
        ));
        session
    }

    // ===== Accessors =====

    pub fn text(&self) -> &TextArea {
        &self.text
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme
    }

    pub fn active_modal_mut(&mut self) -> Option<&mut ActiveModal> {
        self.active_modal.as_mut()
    }

    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    /// Notifications to draw, oldest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.displayed()
    }

    // ===== Document =====

    /// Recompute metrics from the current text.
    pub fn update_metrics(&mut self) {
        self.metrics = Metrics::compute(self.text.text());
        self.needs_redraw = true;
    }

    /// Localized counter labels for the current metrics.
    pub fn counter_labels(&self) -> CounterLabels {
        let t = i18n::t();
        CounterLabels {
            characters: t.count_characters(self.metrics.characters),
            words: t.count_words(self.metrics.words),
            lines: t.count_lines(self.metrics.lines),
            active: self.metrics.has_content(),
        }
    }

    /// React to an edit that already happened.
    pub fn apply_input(&mut self, event: InputEvent) {
        let action = dispatch(event);
        self.update_metrics();
        if action.plays_key_sound() && self.prefs.sound_enabled {
            self.sound.play_key();
        }
    }

    /// Append the example paragraph and move the cursor to the end.
    pub fn insert_example(&mut self) {
        self.text.append(i18n::t().example_text());
        self.apply_input(InputEvent::Other);
    }

    /// Copy the whole document. Does nothing for an empty document.
    pub fn copy_to_clipboard(&mut self) {
        if self.text.is_empty() {
            return;
        }

        let t = i18n::t();
        match self.clipboard.write_text(self.text.text()) {
            Ok(()) => self.notify(t.copy_succeeded(), NotificationKind::Success),
            Err(e) => {
                logger::warn(format!("Clipboard write failed: {:#}", e));
                self.notify(t.copy_failed(), NotificationKind::Error);
            }
        }
    }

    /// Clear the document, asking first if there is anything to lose.
    pub fn clear_text(&mut self) {
        if self.text.is_empty() {
            self.reset_text();
            return;
        }

        let t = i18n::t();
        let modal = ConfirmModal::new(t.clear_title(), t.clear_confirm());
        self.active_modal = Some(ActiveModal::Confirm(Box::new(modal)));
        self.pending_action = Some(ConfirmAction::ClearText);
        self.needs_redraw = true;
    }

    fn reset_text(&mut self) {
        self.text.clear();
        self.apply_input(InputEvent::Other);
    }

    fn run_confirmed(&mut self, action: ConfirmAction) {
        match action {
            ConfirmAction::ClearText => {
                logger::debug("Document cleared");
                self.reset_text();
            }
        }
    }

    // ===== Preferences =====

    /// Switch theme and remember the choice.
    ///
    /// Only the theme bar entries can be selected; anything else selects
    /// [`DEFAULT_THEME`].
    pub fn set_theme(&mut self, name: &str) {
        let theme = Theme::get_by_name(builtin_or_default(name));
        self.theme = theme;
        self.prefs.theme = theme.name.to_string();
        self.persist(THEME_KEY, theme.name);
        self.needs_redraw = true;
    }

    /// Theme bar entries; exactly one is active.
    pub fn theme_choices(&self) -> Vec<ThemeChoice> {
        THEME_NAMES
            .iter()
            .map(|&name| ThemeChoice {
                name,
                active: name == self.prefs.theme,
            })
            .collect()
    }

    /// Flip the sound flag, remember it and tell the user.
    pub fn toggle_sound(&mut self) {
        self.prefs.sound_enabled = !self.prefs.sound_enabled;
        self.persist(SOUND_ENABLED_KEY, bool_str(self.prefs.sound_enabled));

        let t = i18n::t();
        let message = if self.prefs.sound_enabled {
            t.sound_on()
        } else {
            t.sound_off()
        };
        self.notify(message, NotificationKind::Info);
    }

    /// Write one preference. A failing store only costs persistence.
    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            logger::warn(format!("Failed to save preference {}: {:#}", key, e));
        }
    }

    // ===== Timers =====

    pub fn notify(&mut self, message: &str, kind: NotificationKind) {
        self.notifications.notify(message, kind, &mut self.scheduler);
        self.needs_redraw = true;
    }

    /// Run due timers and collect background results.
    pub fn on_tick(&mut self) {
        for task in self.scheduler.take_due() {
            if self.notifications.apply(task) {
                self.needs_redraw = true;
            }
        }
        self.sound.poll();
    }
}

impl std::fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorSession")
            .field("text", &self.text)
            .field("metrics", &self.metrics)
            .field("prefs", &self.prefs)
            .field("theme", &self.theme.name)
            .field("modal_open", &self.active_modal.is_some())
            .finish_non_exhaustive()
    }
}

fn builtin_or_default(name: &str) -> &str {
    if Theme::is_builtin(name) {
        name
    } else {
        DEFAULT_THEME
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tallypad_clipboard::MemoryClipboard;
    use tallypad_config::MemoryPreferenceStore;
    use tallypad_core::{Event, ManualClock, Phase};

    use super::*;

    /// Counts keystroke sounds instead of playing them.
    #[derive(Clone, Default)]
    struct CountingSound {
        plays: Rc<Cell<usize>>,
        polls: Rc<Cell<usize>>,
    }

    impl KeySound for CountingSound {
        fn play_key(&mut self) {
            self.plays.set(self.plays.get() + 1);
        }

        fn poll(&mut self) {
            self.polls.set(self.polls.get() + 1);
        }
    }

    struct Harness {
        session: EditorSession,
        store: MemoryPreferenceStore,
        clipboard: MemoryClipboard,
        sound: CountingSound,
        clock: ManualClock,
    }

    fn harness_with(store: MemoryPreferenceStore, clipboard: MemoryClipboard) -> Harness {
        harness_with_default_theme(store, clipboard, "light")
    }

    fn harness_with_default_theme(
        store: MemoryPreferenceStore,
        clipboard: MemoryClipboard,
        default_theme: &str,
    ) -> Harness {
        let sound = CountingSound::default();
        let clock = ManualClock::new();
        let session = EditorSession::new(
            Box::new(store.clone()),
            Box::new(clipboard.clone()),
            Box::new(sound.clone()),
            clock.clone(),
            default_theme,
        );
        Harness {
            session,
            store,
            clipboard,
            sound,
            clock,
        }
    }

    fn harness() -> Harness {
        harness_with(MemoryPreferenceStore::new(), MemoryClipboard::new())
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT))
    }

    fn type_str(h: &mut Harness, s: &str) {
        for c in s.chars() {
            h.session.handle_event(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn notification_messages(h: &Harness) -> Vec<String> {
        h.session
            .notifications
            .all()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    #[test]
    fn test_startup_defaults() {
        let h = harness();
        assert!(!h.session.preferences().sound_enabled);
        assert_eq!(h.session.preferences().theme, "light");
        assert_eq!(h.session.metrics(), Metrics::default());
        // Sound flag written back once at startup
        assert_eq!(h.store.get(SOUND_ENABLED_KEY).as_deref(), Some("false"));
        assert_eq!(h.store.get(THEME_KEY), None);
    }

    #[test]
    fn test_startup_restores_preferences() {
        let store = MemoryPreferenceStore::with_values([
            (SOUND_ENABLED_KEY, "true"),
            (THEME_KEY, "sepia"),
        ]);
        let h = harness_with(store, MemoryClipboard::new());
        assert!(h.session.preferences().sound_enabled);
        assert_eq!(h.session.theme().name, "sepia");
    }

    #[test]
    fn test_startup_ignores_unknown_theme() {
        let store = MemoryPreferenceStore::with_values([(THEME_KEY, "neon")]);
        let h = harness_with(store, MemoryClipboard::new());
        assert_eq!(h.session.preferences().theme, "light");
    }

    fn active_theme_count(h: &Harness) -> usize {
        h.session
            .theme_choices()
            .iter()
            .filter(|choice| choice.active)
            .count()
    }

    #[test]
    fn test_user_theme_as_default_keeps_one_active_choice() {
        let dir = tempfile::tempdir().unwrap();
        let light = std::fs::read_to_string(
            std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../theme/themes/light.toml"),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("midnight.toml"),
            light.replace("name = \"light\"", "name = \"midnight\""),
        )
        .unwrap();
        tallypad_theme::set_themes_dir(dir.path().to_path_buf());

        let h = harness_with_default_theme(
            MemoryPreferenceStore::new(),
            MemoryClipboard::new(),
            "midnight",
        );
        assert_eq!(h.session.preferences().theme, DEFAULT_THEME);
        assert_eq!(h.session.theme().name, DEFAULT_THEME);
        assert_eq!(active_theme_count(&h), 1);
    }

    #[test]
    fn test_unknown_default_theme_keeps_one_active_choice() {
        let h = harness_with_default_theme(
            MemoryPreferenceStore::new(),
            MemoryClipboard::new(),
            "neon",
        );
        assert_eq!(h.session.preferences().theme, DEFAULT_THEME);
        assert_eq!(active_theme_count(&h), 1);
    }

    #[test]
    fn test_set_theme_outside_the_bar_selects_default() {
        let mut h = harness();
        h.session.set_theme("dark");
        h.session.set_theme("midnight");
        assert_eq!(h.session.preferences().theme, DEFAULT_THEME);
        assert_eq!(active_theme_count(&h), 1);
        assert_eq!(h.store.get(THEME_KEY).as_deref(), Some(DEFAULT_THEME));
    }

    #[test]
    fn test_metrics_follow_typing() {
        let mut h = harness();
        type_str(&mut h, "hej du");
        h.session.handle_event(key(KeyCode::Enter)).unwrap();
        type_str(&mut h, "rad");

        let m = h.session.metrics();
        assert_eq!(m.characters, 10);
        assert_eq!(m.words, 3);
        assert_eq!(m.lines, 2);

        let labels = h.session.counter_labels();
        assert_eq!(labels.characters, "10 tecken");
        assert_eq!(labels.words, "3 ord");
        assert_eq!(labels.lines, "2 rader");
        assert!(labels.active);
    }

    #[test]
    fn test_empty_counter_labels() {
        let h = harness();
        let labels = h.session.counter_labels();
        assert_eq!(labels.characters, "0 tecken");
        assert_eq!(labels.lines, "0 rader");
        assert!(!labels.active);
    }

    #[test]
    fn test_toggle_sound_twice_persists_each_state() {
        let mut h = harness();
        let original = h.session.preferences().sound_enabled;

        h.session.handle_event(alt('s')).unwrap();
        assert_eq!(h.session.preferences().sound_enabled, !original);
        assert_eq!(h.store.get(SOUND_ENABLED_KEY).as_deref(), Some("true"));

        h.session.toggle_sound();
        assert_eq!(h.session.preferences().sound_enabled, original);
        assert_eq!(h.store.get(SOUND_ENABLED_KEY).as_deref(), Some("false"));

        assert_eq!(notification_messages(&h), vec!["🔊 Ljud på", "🔇 Ljud av"]);
    }

    #[test]
    fn test_toggle_sound_with_failing_store_still_flips() {
        let store = MemoryPreferenceStore::new();
        let mut h = harness_with(store.clone(), MemoryClipboard::new());
        store.set_fail_writes(true);

        h.session.toggle_sound();
        assert!(h.session.preferences().sound_enabled);
        assert_eq!(h.store.get(SOUND_ENABLED_KEY).as_deref(), Some("false"));
    }

    #[test]
    fn test_select_theme_persists_and_marks_one_active() {
        let mut h = harness();
        for name in THEME_NAMES {
            h.session.set_theme(name);
            assert_eq!(h.store.get(THEME_KEY).as_deref(), Some(name));
            let active: Vec<_> = h
                .session
                .theme_choices()
                .into_iter()
                .filter(|c| c.active)
                .collect();
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].name, name);
        }
    }

    #[test]
    fn test_theme_hotkeys() {
        let mut h = harness();
        h.session.handle_event(alt('2')).unwrap();
        assert_eq!(h.session.theme().name, "dark");
        h.session.handle_event(alt('t')).unwrap();
        assert_eq!(h.session.theme().name, "sepia");
        h.session.handle_event(alt('t')).unwrap();
        assert_eq!(h.session.theme().name, "light");
        assert_eq!(h.store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_clear_empty_text_skips_prompt() {
        let mut h = harness();
        h.session.clear_text();
        assert!(!h.session.has_modal());
        assert!(h.session.text().is_empty());
    }

    #[test]
    fn test_clear_declined_keeps_text() {
        let mut h = harness();
        type_str(&mut h, "behåll");

        h.session.handle_event(alt('r')).unwrap();
        assert!(h.session.has_modal());

        // Typing goes to the dialog, not the document
        h.session.handle_event(key(KeyCode::Char('x'))).unwrap();
        assert!(h.session.has_modal());
        assert_eq!(h.session.text().text(), "behåll");

        h.session.handle_event(key(KeyCode::Char('n'))).unwrap();
        assert!(!h.session.has_modal());
        assert_eq!(h.session.text().text(), "behåll");
        assert_eq!(h.session.metrics().characters, 6);
    }

    #[test]
    fn test_clear_cancelled_with_escape_keeps_text() {
        let mut h = harness();
        type_str(&mut h, "abc");
        h.session.clear_text();
        h.session.handle_event(key(KeyCode::Esc)).unwrap();
        assert!(!h.session.has_modal());
        assert_eq!(h.session.text().text(), "abc");
    }

    #[test]
    fn test_clear_confirmed_empties_text() {
        let mut h = harness();
        type_str(&mut h, "bort med det");
        h.session.clear_text();
        h.session.handle_event(key(KeyCode::Enter)).unwrap();

        assert!(!h.session.has_modal());
        assert!(h.session.text().is_empty());
        assert_eq!(h.session.text().cursor(), 0);
        assert_eq!(h.session.metrics(), Metrics::default());
    }

    #[test]
    fn test_example_then_copy() {
        let mut h = harness();
        h.session.handle_event(alt('e')).unwrap();
        h.session.handle_event(alt('c')).unwrap();

        let example = i18n::t().example_text();
        assert_eq!(h.clipboard.content().as_deref(), Some(example));
        assert_eq!(h.session.text().text(), example);
        assert_eq!(h.session.text().cursor(), example.chars().count());
        assert_eq!(notification_messages(&h), vec!["✓ Text kopierad!"]);
    }

    #[test]
    fn test_copy_empty_does_nothing() {
        let mut h = harness();
        h.session.copy_to_clipboard();
        assert_eq!(h.clipboard.content(), None);
        assert!(h.session.notifications.is_empty());
    }

    #[test]
    fn test_copy_failure_notifies() {
        let mut h = harness_with(MemoryPreferenceStore::new(), MemoryClipboard::rejecting());
        type_str(&mut h, "text");
        h.session.copy_to_clipboard();
        assert_eq!(notification_messages(&h), vec!["⚠ Kunde inte kopiera"]);
        assert_eq!(h.session.text().text(), "text");
    }

    #[test]
    fn test_typing_plays_sound_only_when_enabled() {
        let mut h = harness();
        type_str(&mut h, "a");
        assert_eq!(h.sound.plays.get(), 0);

        h.session.toggle_sound();
        type_str(&mut h, "b");
        assert_eq!(h.sound.plays.get(), 1);

        h.session.handle_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(h.sound.plays.get(), 2);
    }

    #[test]
    fn test_paste_never_plays_sound() {
        for enabled in [false, true] {
            let mut h = harness();
            if enabled {
                h.session.toggle_sound();
            }
            h.session
                .handle_event(Event::Paste("klistrat in".to_string()))
                .unwrap();
            assert_eq!(h.session.text().text(), "klistrat in");
            assert_eq!(h.session.metrics().words, 2);
            assert_eq!(h.sound.plays.get(), 0);
        }
    }

    #[test]
    fn test_other_edits_are_silent() {
        let mut h = harness();
        h.session.toggle_sound();
        type_str(&mut h, "ab");
        let after_typing = h.sound.plays.get();

        h.session.handle_event(key(KeyCode::Enter)).unwrap();
        h.session.handle_event(key(KeyCode::Left)).unwrap();
        h.session.handle_event(key(KeyCode::Delete)).unwrap();
        h.session.insert_example();
        h.session.clear_text();
        h.session.handle_event(key(KeyCode::Enter)).unwrap();

        assert_eq!(h.sound.plays.get(), after_typing);
        assert!(h.session.text().is_empty());
    }

    #[test]
    fn test_backspace_on_empty_is_silent() {
        let mut h = harness();
        h.session.toggle_sound();
        h.session.handle_event(key(KeyCode::Backspace)).unwrap();
        assert_eq!(h.sound.plays.get(), 0);
    }

    #[test]
    fn test_hotkeys_are_not_inserted() {
        let mut h = harness();
        h.session.handle_event(alt('S')).unwrap();
        h.session.handle_event(alt('z')).unwrap();
        h.session
            .handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('x'),
                KeyModifiers::CONTROL,
            )))
            .unwrap();
        assert!(h.session.text().is_empty());
        assert!(h.session.preferences().sound_enabled);
    }

    #[test]
    fn test_shift_letters_are_text() {
        let mut h = harness();
        h.session
            .handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('Å'),
                KeyModifiers::SHIFT,
            )))
            .unwrap();
        assert_eq!(h.session.text().text(), "Å");
    }

    #[test]
    fn test_notifications_run_on_ticks() {
        let mut h = harness();
        h.session.notify("hej", NotificationKind::Info);
        assert_eq!(h.session.notifications().count(), 0);

        h.clock.advance(Duration::from_millis(10));
        h.session.handle_event(Event::Tick).unwrap();
        let shown: Vec<_> = h.session.notifications().map(|n| n.phase).collect();
        assert_eq!(shown, vec![Phase::Visible]);

        h.clock.advance(Duration::from_millis(2290));
        h.session.handle_event(Event::Tick).unwrap();
        assert_eq!(h.session.notifications().count(), 0);
        assert!(h.sound.polls.get() >= 2);
    }

    #[test]
    fn test_ctrl_q_quits() {
        let mut h = harness();
        h.session
            .handle_event(Event::Key(KeyEvent::new(
                KeyCode::Char('q'),
                KeyModifiers::CONTROL,
            )))
            .unwrap();
        assert!(h.session.should_quit);
    }
}
