//! Notification toasts in the bottom-right corner of the editor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use tallypad_core::{Notification, NotificationKind, Phase};
use tallypad_theme::Theme;

/// Stack notifications upwards from the bottom edge of `area`, newest last.
pub fn render_notifications<'a>(
    buf: &mut Buffer,
    area: Rect,
    theme: &Theme,
    items: impl Iterator<Item = &'a Notification>,
) {
    // Stay inside the editor border
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let items: Vec<&Notification> = items.collect();
    let visible = items.len().min(inner.height as usize);

    for (offset, notification) in items[items.len() - visible..].iter().rev().enumerate() {
        let text = format!(" {} ", notification.message);
        let width = (text.width() as u16).min(inner.width);
        let x = inner.right() - width;
        let y = inner.bottom() - 1 - offset as u16;

        let line = Line::from(Span::styled(text, style_for(notification, theme)));
        buf.set_line(x, y, &line, width);
    }
}

fn style_for(notification: &Notification, theme: &Theme) -> Style {
    let base = Style::default().bg(theme.accented_bg);
    if notification.phase == Phase::Leaving {
        return base.fg(theme.disabled).add_modifier(Modifier::DIM);
    }
    let fg = match notification.kind {
        NotificationKind::Info => theme.warning,
        NotificationKind::Success => theme.success,
        NotificationKind::Error => theme.error,
    };
    base.fg(fg).add_modifier(Modifier::BOLD)
}
