//! Theme system for tallypad.
//!
//! Three built-in themes (`light`, `dark`, `sepia`) are embedded at compile
//! time. A TOML file with the same name in the user's themes directory
//! overrides the built-in palette.

mod colors;
mod loader;

pub use colors::Theme;
pub use loader::{load_theme, load_theme_from_str};

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "light";

/// Built-in theme identifiers in display order.
pub const THEME_NAMES: [&str; 3] = ["light", "dark", "sepia"];

const THEME_LIGHT_TOML: &str = include_str!("../themes/light.toml");
const THEME_DARK_TOML: &str = include_str!("../themes/dark.toml");
const THEME_SEPIA_TOML: &str = include_str!("../themes/sepia.toml");

static THEME_LIGHT: OnceLock<Theme> = OnceLock::new();
static THEME_DARK: OnceLock<Theme> = OnceLock::new();
static THEME_SEPIA: OnceLock<Theme> = OnceLock::new();

static USER_THEMES: OnceLock<Mutex<HashMap<String, &'static Theme>>> = OnceLock::new();

static THEMES_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Set the user themes directory (call once at startup).
pub fn set_themes_dir(path: PathBuf) {
    let _ = THEMES_DIR.set(path);
}

fn get_hardcoded_fallback_theme(name: &'static str) -> Theme {
    Theme {
        name,
        bg: Color::Reset,
        fg: Color::Reset,
        accented_bg: Color::DarkGray,
        accented_fg: Color::Cyan,
        selected_bg: Color::Blue,
        selected_fg: Color::White,
        disabled: Color::Gray,
        success: Color::Green,
        warning: Color::Yellow,
        error: Color::Red,
    }
}

fn load_builtin(content: &str, name: &'static str) -> Theme {
    loader::load_theme_from_str(content, name).unwrap_or_else(|e| {
        eprintln!(
            "Failed to parse built-in theme '{}': {}. Using fallback theme.",
            name, e
        );
        get_hardcoded_fallback_theme(name)
    })
}

fn builtin(name: &str) -> Option<&'static Theme> {
    match name {
        "light" => Some(THEME_LIGHT.get_or_init(|| load_builtin(THEME_LIGHT_TOML, "light"))),
        "dark" => Some(THEME_DARK.get_or_init(|| load_builtin(THEME_DARK_TOML, "dark"))),
        "sepia" => Some(THEME_SEPIA.get_or_init(|| load_builtin(THEME_SEPIA_TOML, "sepia"))),
        _ => None,
    }
}

fn try_load_user_theme(name: &str) -> Option<&'static Theme> {
    let cache = USER_THEMES.get_or_init(|| Mutex::new(HashMap::new()));

    {
        let cache_lock = cache.lock().ok()?;
        if let Some(theme) = cache_lock.get(name) {
            return Some(*theme);
        }
    }

    let theme_path = THEMES_DIR.get()?.join(format!("{}.toml", name));
    if !theme_path.exists() {
        return None;
    }

    let mut theme = load_theme(&theme_path).ok()?;
    // The file name is the identifier, whatever the file says inside
    theme.name = builtin(name)
        .map(|t| t.name)
        .unwrap_or_else(|| Box::leak(name.to_string().into_boxed_str()));
    let static_theme: &'static Theme = Box::leak(Box::new(theme));

    if let Ok(mut cache_lock) = cache.lock() {
        cache_lock.insert(name.to_string(), static_theme);
    }

    Some(static_theme)
}

impl Theme {
    /// Get theme by identifier.
    ///
    /// User themes win over built-ins; unknown names fall back to
    /// [`DEFAULT_THEME`].
    pub fn get_by_name(name: &str) -> &'static Theme {
        if let Some(theme) = try_load_user_theme(name) {
            return theme;
        }
        builtin(name).unwrap_or_else(|| Self::get_by_name(DEFAULT_THEME))
    }

    /// Whether `name` is one of the built-in identifiers.
    pub fn is_builtin(name: &str) -> bool {
        THEME_NAMES.contains(&name)
    }

    /// Identifier of the theme after `current`, wrapping around.
    pub fn next_name(current: &str) -> &'static str {
        let idx = THEME_NAMES
            .iter()
            .position(|n| *n == current)
            .map(|i| (i + 1) % THEME_NAMES.len())
            .unwrap_or(0);
        THEME_NAMES[idx]
    }
}
