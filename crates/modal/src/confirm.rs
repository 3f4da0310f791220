//! Confirmation modal (Yes/No dialog).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use tallypad_config::constants::MODAL_BUTTON_SPACING;
use tallypad_i18n as i18n;
use tallypad_theme::Theme;

use crate::{calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult};

/// Confirmation modal window (Yes/No)
#[derive(Debug)]
pub struct ConfirmModal {
    title: String,
    message: String,
    selected: bool, // true = Yes, false = No
}

impl ConfirmModal {
    /// Create a new confirmation modal window. "Yes" starts selected.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected: true,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether "Yes" is the highlighted button.
    pub fn yes_selected(&self) -> bool {
        self.selected
    }

    fn button_labels() -> (String, String) {
        let t = i18n::t();
        (format!("[ {} ]", t.ui_yes()), format!("[ {} ]", t.ui_no()))
    }

    fn modal_width(&self, screen_width: u16) -> u16 {
        let (yes, no) = Self::button_labels();
        let title_width = self.title.width() as u16 + 2;
        let message_width = max_line_width(&self.message);
        let buttons_width = (yes.width() + no.width()) as u16 + MODAL_BUTTON_SPACING;

        calculate_modal_width(
            [title_width, message_width, buttons_width].into_iter(),
            screen_width,
        )
    }

    /// Rows the message needs once wrapped to `inner_width` columns.
    fn message_height(&self, inner_width: u16) -> u16 {
        let inner_width = inner_width.max(1) as usize;
        let mut rows = 0usize;
        for line in self.message.lines() {
            let mut used = 0usize;
            rows += 1;
            for word in line.split_whitespace() {
                let w = word.width();
                if used > 0 && used + 1 + w > inner_width {
                    rows += 1;
                    used = 0;
                }
                used += if used > 0 { 1 + w } else { w };
                // Words wider than the row spill over
                while used > inner_width {
                    rows += 1;
                    used -= inner_width;
                }
            }
        }
        rows.max(1) as u16
    }
}

impl Modal for ConfirmModal {
    type Result = bool;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let modal_width = self.modal_width(area.width);
        let message_lines = self.message_height(modal_width.saturating_sub(2));
        // Borders, message, one blank row, buttons
        let modal_height = message_lines + 4;

        let modal_area = centered_rect_with_size(modal_width, modal_height, area);

        Clear.render(modal_area, buf);

        // Inverted colors so the dialog stands out from the editor
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme.bg).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.bg))
            .style(Style::default().bg(theme.fg));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_lines),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.bg))
            .render(chunks[0], buf);

        let selected_style = Style::default()
            .fg(theme.fg)
            .bg(theme.accented_fg)
            .add_modifier(Modifier::BOLD);
        let idle_style = Style::default().fg(theme.accented_fg);
        let (yes_style, no_style) = if self.selected {
            (selected_style, idle_style)
        } else {
            (idle_style, selected_style)
        };

        let (yes, no) = Self::button_labels();
        let buttons = Line::from(vec![
            Span::styled(yes, yes_style),
            Span::raw(" ".repeat(MODAL_BUTTON_SPACING as usize)),
            Span::styled(no, no_style),
        ]);

        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = !self.selected;
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(ModalResult::Confirmed(self.selected))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('j') | KeyCode::Char('J') => {
                Ok(Some(ModalResult::Confirmed(true)))
            }
            KeyCode::Char('n') | KeyCode::Char('N') => Ok(Some(ModalResult::Confirmed(false))),
            _ => Ok(None),
        }
    }
}
