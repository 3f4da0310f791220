mod ui;

use anyhow::Result;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::str::FromStr;
use std::time::Duration;

use tallypad_app::{App, EditorSession};
use tallypad_clipboard::SystemClipboard;
use tallypad_config::{
    constants::MAX_LOG_ENTRIES, Config, FilePreferenceStore, MemoryPreferenceStore,
    PreferenceStore,
};
use tallypad_core::SystemClock;
use tallypad_logger::{self as logger, LogLevel};
use tallypad_theme::set_themes_dir;

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config: {:#}. Using defaults.", e);
        Config::default()
    });

    // Initialize theme system with themes directory from config
    if let Ok(themes_dir) = Config::get_themes_dir() {
        set_themes_dir(themes_dir);
    }

    init_logging(&config);

    let sound = tallypad_sound::engine_from_settings(
        &config.sound,
        tallypad_sound::open_output(config.sound.volume),
    );
    let session = EditorSession::new(
        open_preferences(),
        Box::new(SystemClipboard::new()),
        sound,
        SystemClock,
        &config.general.default_theme,
    );
    let tick_rate = Duration::from_millis(config.general.tick_rate_ms.max(1));
    let mut app = App::new(session, tick_rate);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    // With the kitty protocol Alt+letter arrives unambiguously
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableFocusChange
    )?;

    if keyboard_enhanced {
        // REPORT_ALL_KEYS_AS_ESCAPE_CODES would turn bare modifiers into key
        // events; disambiguation is enough here.
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, ui::render);

    // Restore terminal
    disable_raw_mode()?;
    if keyboard_enhanced {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        logger::error(format!("Application error: {:#}", err));
        // Recent problems leading up to the failure
        for entry in logger::get_entries()
            .iter()
            .filter(|e| e.level >= LogLevel::Warn)
        {
            eprintln!("[{}] {}: {}", entry.timestamp, entry.level.to_str(), entry.message);
        }
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let min_level = LogLevel::from_str(&config.logging.min_level).unwrap_or(LogLevel::Info);
    logger::init(config.log_file_path(), MAX_LOG_ENTRIES, min_level);
    logger::info("Application started");
}

/// Preference store in the data directory, or an in-memory one if that
/// cannot be used.
fn open_preferences() -> Box<dyn PreferenceStore> {
    let opened = Config::preferences_file_path().and_then(FilePreferenceStore::open);
    match opened {
        Ok(store) => {
            logger::debug(format!("Preferences: {}", store.path().display()));
            Box::new(store)
        }
        Err(e) => {
            logger::warn(format!("Preferences will not be saved: {:#}", e));
            Box::new(MemoryPreferenceStore::new())
        }
    }
}
