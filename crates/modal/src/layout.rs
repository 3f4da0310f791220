//! Modal sizing and placement.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

/// Minimum modal width.
const MIN_WIDTH: u16 = 30;
/// Maximum width as a fraction of the screen.
const MAX_WIDTH_PERCENTAGE: f32 = 0.75;
/// Border plus inner margin on both sides.
const PADDING_WITH_BORDER: u16 = 6;

/// Calculate modal width from the widest piece of content.
///
/// Adds border padding, then clamps between the minimum width and 75% of
/// the screen (never wider than the screen itself).
pub fn calculate_modal_width(content_widths: impl Iterator<Item = u16>, screen_width: u16) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let total_width = content_width.saturating_add(PADDING_WITH_BORDER);
    let max_width = (screen_width as f32 * MAX_WIDTH_PERCENTAGE) as u16;

    total_width.max(MIN_WIDTH).min(max_width).min(screen_width)
}

/// Display width of the widest line in `text`.
pub fn max_line_width(text: &str) -> u16 {
    text.lines().map(UnicodeWidthStr::width).max().unwrap_or(0) as u16
}

/// Rect of the given size centered in `r`.
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let horizontal_margin = r.width.saturating_sub(width) / 2;
    let vertical_margin = r.height.saturating_sub(height) / 2;

    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_margin),
            Constraint::Length(height),
            Constraint::Length(vertical_margin),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(horizontal_margin),
            Constraint::Length(width),
            Constraint::Length(horizontal_margin),
        ])
        .split(vertical_layout[1])[1]
}
