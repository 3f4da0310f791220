//! One-line bars: title, counters, theme and sound toolbar.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use tallypad_app::{CounterLabels, ThemeChoice};
use tallypad_i18n as i18n;
use tallypad_theme::Theme;

use super::active_style;

/// Fill entire line with background color from theme
fn fill_line(buf: &mut Buffer, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    for x in area.left()..area.right() {
        buf[(x, area.top())]
            .set_char(' ')
            .set_style(Style::default().bg(theme.accented_bg));
    }
}

/// App name on the left, action shortcuts on the right.
pub fn render_title_bar(buf: &mut Buffer, area: Rect, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    fill_line(buf, area, theme);

    let t = i18n::t();
    let title = Line::from(Span::styled(
        format!(" {} ", t.app_title()),
        Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD),
    ));
    let title_width = title.width() as u16;
    buf.set_line(area.x, area.y, &title, area.width);

    let key_style = Style::default().fg(theme.fg).bg(theme.accented_bg);
    let label_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);
    let mut spans = Vec::new();
    for (key, label) in [
        ("Alt+E", t.action_example()),
        ("Alt+C", t.action_copy()),
        ("Alt+R", t.action_clear()),
        ("Ctrl+Q", t.action_quit()),
    ] {
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(" {}  ", label), label_style));
    }
    let hints = Line::from(spans);
    let hints_width = hints.width() as u16;

    // Hints only if they fit next to the title
    if title_width + hints_width <= area.width {
        buf.set_line(area.right() - hints_width, area.y, &hints, hints_width);
    }
}

/// Character, word and line counters.
pub fn render_counter_bar(buf: &mut Buffer, area: Rect, theme: &Theme, labels: &CounterLabels) {
    if area.height == 0 {
        return;
    }
    fill_line(buf, area, theme);

    let base_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);
    let characters_style = if labels.active {
        Style::default()
            .fg(theme.accented_fg)
            .bg(theme.accented_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        base_style
    };

    let line = Line::from(vec![
        Span::styled(labels.characters.as_str(), characters_style),
        Span::styled("  │  ", base_style),
        Span::styled(labels.words.as_str(), base_style),
        Span::styled("  │  ", base_style),
        Span::styled(labels.lines.as_str(), base_style),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, buf);
}

/// Theme buttons on the left, sound toggle on the right.
pub fn render_toolbar(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    choices: &[ThemeChoice],
    sound_enabled: bool,
) {
    if area.height == 0 {
        return;
    }
    fill_line(buf, area, theme);

    let t = i18n::t();
    let idle_style = Style::default().fg(theme.disabled).bg(theme.accented_bg);

    let mut spans = vec![Span::styled(" ", idle_style)];
    for (i, choice) in choices.iter().enumerate() {
        let style = if choice.active {
            active_style(theme)
        } else {
            idle_style
        };
        spans.push(Span::styled(
            format!(" {} {} ", i + 1, t.theme_label(choice.name)),
            style,
        ));
        spans.push(Span::styled(" ", idle_style));
    }
    spans.push(Span::styled(" Alt+T", idle_style));
    buf.set_line(area.x, area.y, &Line::from(spans), area.width);

    let toggle_style = if sound_enabled {
        active_style(theme).fg(theme.success)
    } else {
        idle_style
    };
    let icon = if sound_enabled { "🔊" } else { "🔇" };
    let toggle = Line::from(vec![
        Span::styled(format!(" {} {} ", icon, t.sound_toggle()), toggle_style),
        Span::styled(" Alt+S ", idle_style),
    ]);
    let toggle_width = toggle.width() as u16;
    if toggle_width <= area.width {
        buf.set_line(area.right() - toggle_width, area.y, &toggle, toggle_width);
    }
}

