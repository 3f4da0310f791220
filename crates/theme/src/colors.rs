//! Theme color definitions.

use ratatui::style::Color;

/// Application theme with semantic color assignments.
///
/// - 2 base colors (bg, fg)
/// - 2 accented colors (accented_bg, accented_fg)
/// - 2 selection colors (selected_bg, selected_fg)
/// - 1 disabled color
/// - 3 semantic colors (success, warning, error)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Theme identifier (persisted as the `theme` preference)
    pub name: &'static str,

    /// Text area background
    pub bg: Color,
    /// Document text
    pub fg: Color,

    /// Toolbar and counter bar background
    pub accented_bg: Color,
    /// Counter highlight once the document has content, borders
    pub accented_fg: Color,

    /// Active theme button, active sound toggle
    pub selected_bg: Color,
    pub selected_fg: Color,

    /// Inactive buttons, zero counters, key hints
    pub disabled: Color,

    /// Success notifications
    pub success: Color,
    /// Informational notifications
    pub warning: Color,
    /// Failure notifications
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        *Self::get_by_name(crate::DEFAULT_THEME)
    }
}
