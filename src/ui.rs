use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use tallypad_app::EditorSession;
use tallypad_config::constants::MIN_HEIGHT_FOR_TOOLBAR;
use tallypad_modal::{ActiveModal, Modal};

mod bars;
mod notifications;

/// Render the whole screen.
pub fn render(frame: &mut Frame, session: &mut EditorSession) {
    let size = frame.area();
    let theme = session.theme();

    // Set application background
    let background = Block::default().style(Style::default().bg(theme.bg).fg(theme.fg));
    frame.render_widget(background, size);

    let toolbar_height = if size.height >= MIN_HEIGHT_FOR_TOOLBAR {
        1
    } else {
        0
    };

    // Title (1 line), editor, counters (1 line), themes and sound (1 line)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(toolbar_height),
        ])
        .split(size);

    bars::render_title_bar(frame.buffer_mut(), chunks[0], theme);
    render_editor(frame, chunks[1], session);
    bars::render_counter_bar(frame.buffer_mut(), chunks[2], theme, &session.counter_labels());
    if toolbar_height > 0 {
        bars::render_toolbar(
            frame.buffer_mut(),
            chunks[3],
            theme,
            &session.theme_choices(),
            session.preferences().sound_enabled,
        );
    }

    notifications::render_notifications(
        frame.buffer_mut(),
        chunks[1],
        theme,
        session.notifications(),
    );

    render_modals(frame, session);
}

/// Document text with the cursor kept in view.
fn render_editor(frame: &mut Frame, area: Rect, session: &EditorSession) {
    let theme = session.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.disabled))
        .style(Style::default().bg(theme.bg).fg(theme.fg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let wrapped = session.text().wrap(inner.width as usize);
    let (cursor_row, cursor_col) = wrapped.cursor;
    let height = inner.height as usize;
    let scroll = (cursor_row + 1).saturating_sub(height);

    let lines: Vec<Line> = wrapped
        .rows
        .into_iter()
        .skip(scroll)
        .take(height)
        .map(Line::from)
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    // The dialog takes the cursor while it is open
    if !session.has_modal() {
        frame.set_cursor_position(Position::new(
            inner.x + cursor_col as u16,
            inner.y + (cursor_row - scroll) as u16,
        ));
    }
}

/// Render modal windows
fn render_modals(frame: &mut Frame, session: &mut EditorSession) {
    // Copy theme before getting mutable modal reference
    let theme = session.theme();

    if let Some(modal) = session.active_modal_mut() {
        let area = frame.area();
        match modal {
            ActiveModal::Confirm(m) => m.render(area, frame.buffer_mut(), theme),
        }
    }
}

/// Style for a highlighted toolbar entry.
fn active_style(theme: &tallypad_theme::Theme) -> Style {
    Style::default()
        .fg(theme.selected_fg)
        .bg(theme.selected_bg)
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;
    use tallypad_clipboard::MemoryClipboard;
    use tallypad_config::MemoryPreferenceStore;
    use tallypad_core::{Event, ManualClock};
    use tallypad_sound::{SilentOutput, SynthKeySound};

    fn session(clock: ManualClock) -> EditorSession {
        EditorSession::new(
            Box::new(MemoryPreferenceStore::new()),
            Box::new(MemoryClipboard::new()),
            Box::new(SynthKeySound::new(Box::new(SilentOutput))),
            clock,
            "light",
        )
    }

    fn draw(session: &mut EditorSession, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, session)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn press(session: &mut EditorSession, code: KeyCode, modifiers: KeyModifiers) {
        session
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .unwrap();
    }

    #[test]
    fn test_empty_screen_shows_counters_and_themes() {
        let mut s = session(ManualClock::new());
        let text = screen_text(&draw(&mut s, 100, 20));

        assert!(text.contains("Teckenräknare"));
        assert!(text.contains("0 tecken"));
        assert!(text.contains("0 ord"));
        assert!(text.contains("0 rader"));
        assert!(text.contains("Ljust"));
        assert!(text.contains("Mörkt"));
        assert!(text.contains("Sepia"));
    }

    #[test]
    fn test_typed_text_is_drawn() {
        let mut s = session(ManualClock::new());
        for c in "hej".chars() {
            press(&mut s, KeyCode::Char(c), KeyModifiers::NONE);
        }
        let text = screen_text(&draw(&mut s, 60, 12));
        assert!(text.contains("hej"));
        assert!(text.contains("3 tecken"));
        assert!(text.contains("1 rad "));
    }

    #[test]
    fn test_notification_appears_after_entry_delay() {
        let clock = ManualClock::new();
        let mut s = session(clock.clone());
        press(&mut s, KeyCode::Char('s'), KeyModifiers::ALT);

        assert!(!screen_text(&draw(&mut s, 80, 20)).contains("Ljud på"));

        clock.advance(Duration::from_millis(10));
        s.handle_event(Event::Tick).unwrap();
        assert!(screen_text(&draw(&mut s, 80, 20)).contains("Ljud på"));

        clock.advance(Duration::from_millis(2300));
        s.handle_event(Event::Tick).unwrap();
        assert!(!screen_text(&draw(&mut s, 80, 20)).contains("Ljud på"));
    }

    #[test]
    fn test_confirm_dialog_is_drawn() {
        let mut s = session(ManualClock::new());
        press(&mut s, KeyCode::Char('x'), KeyModifiers::NONE);
        press(&mut s, KeyCode::Char('r'), KeyModifiers::ALT);

        let text = screen_text(&draw(&mut s, 80, 20));
        assert!(text.contains("Är du säker på att du vill rensa texten?"));
        assert!(text.contains("[ Ja ]"));
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let mut s = session(ManualClock::new());
        for i in 0..30 {
            s.handle_paste(&format!("rad {}\n", i));
        }
        s.handle_paste("sista");
        let text = screen_text(&draw(&mut s, 40, 12));
        assert!(text.contains("sista"));
        assert!(!text.contains("rad 0 "));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut s = session(ManualClock::new());
        s.insert_example();
        draw(&mut s, 10, 3);
        draw(&mut s, 1, 1);
    }
}
