//! User-facing strings for tallypad.
//!
//! The interface ships in one locale, Swedish (`sv-SE`), including its
//! number formatting. Strings go through the [`Translation`] trait so the
//! rest of the code never embeds UI text directly.

mod number;
mod sv;

pub use number::format_count;
pub use sv::Swedish;

/// All user-facing strings.
pub trait Translation: Send + Sync {
    // Counters
    fn count_characters(&self, count: usize) -> String;
    fn count_words(&self, count: usize) -> String;
    fn count_lines(&self, count: usize) -> String;

    // Notifications
    fn sound_on(&self) -> &'static str;
    fn sound_off(&self) -> &'static str;
    fn copy_succeeded(&self) -> &'static str;
    fn copy_failed(&self) -> &'static str;

    // Clear confirmation
    fn clear_title(&self) -> &'static str;
    fn clear_confirm(&self) -> &'static str;

    // Modal buttons
    fn ui_yes(&self) -> &'static str;
    fn ui_no(&self) -> &'static str;

    // Toolbar
    fn app_title(&self) -> &'static str;
    fn theme_label(&self, name: &str) -> String;
    fn sound_toggle(&self) -> &'static str;
    fn action_example(&self) -> &'static str;
    fn action_copy(&self) -> &'static str;
    fn action_clear(&self) -> &'static str;
    fn action_quit(&self) -> &'static str;

    /// Text inserted by the example action
    fn example_text(&self) -> &'static str;
}

static SWEDISH: Swedish = Swedish;

/// The active translation.
pub fn t() -> &'static dyn Translation {
    &SWEDISH
}
