//! Editable document text with a cursor.
//!
//! The cursor is a character index (not a byte offset) into the text.
//! Rendering wraps lines by display width; see [`TextArea::wrap`].

use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextArea {
    text: String,
    cursor: usize,
}

/// Text laid out for a fixed width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    /// Screen rows, control characters already replaced by spaces
    pub rows: Vec<String>,
    /// Cursor position as (row, column) in screen cells
    pub cursor: (usize, usize),
}

impl TextArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert `s` at the cursor. Line endings are normalized to `\n`.
    pub fn insert_str(&mut self, s: &str) {
        let normalized = normalize_newlines(s);
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, &normalized);
        self.cursor += normalized.chars().count();
    }

    /// Append `s` and put the cursor at the very end.
    pub fn append(&mut self, s: &str) {
        self.text.push_str(&normalize_newlines(s));
        self.cursor = self.char_len();
    }

    /// Delete the character before the cursor. Returns `false` at the start.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete the character under the cursor. Returns `false` at the end.
    pub fn delete_forward(&mut self) -> bool {
        let at = self.byte_index(self.cursor);
        if at >= self.text.len() {
            return false;
        }
        self.text.remove(at);
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Start of the current line.
    pub fn move_home(&mut self) {
        let (_, col) = self.line_and_column();
        self.cursor -= col;
    }

    /// End of the current line.
    pub fn move_end(&mut self) {
        let (line, col) = self.line_and_column();
        let len = self.line_lengths()[line];
        self.cursor += len - col;
    }

    pub fn move_up(&mut self) {
        let (line, col) = self.line_and_column();
        if line > 0 {
            self.move_to(line - 1, col);
        } else {
            self.cursor = 0;
        }
    }

    pub fn move_down(&mut self) {
        let (line, col) = self.line_and_column();
        let lines = self.line_lengths();
        if line + 1 < lines.len() {
            self.move_to(line + 1, col);
        } else {
            self.cursor = self.char_len();
        }
    }

    fn move_to(&mut self, line: usize, col: usize) {
        let lines = self.line_lengths();
        // Each earlier line contributes its characters plus the newline
        let start: usize = lines[..line].iter().map(|len| len + 1).sum();
        self.cursor = start + col.min(lines[line]);
    }

    /// Character count of every `\n`-separated line (at least one).
    fn line_lengths(&self) -> Vec<usize> {
        self.text.split('\n').map(|l| l.chars().count()).collect()
    }

    /// Logical line and character column of the cursor.
    pub fn line_and_column(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for c in self.text.chars().take(self.cursor) {
            if c == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Lay the text out in rows of at most `width` cells.
    ///
    /// Long lines break at the character that would overflow; a cursor at
    /// the very end of a full row moves to the start of the next one.
    pub fn wrap(&self, width: usize) -> WrappedText {
        let width = width.max(1);
        let mut rows = vec![String::new()];
        let mut row_width = 0usize;
        let mut cursor = None;

        for (idx, c) in self.text.chars().enumerate() {
            if c == '\n' {
                if idx == self.cursor {
                    cursor = Some((rows.len() - 1, row_width));
                }
                rows.push(String::new());
                row_width = 0;
                continue;
            }

            let (shown, w) = display_char(c);
            if row_width + w > width && row_width > 0 {
                rows.push(String::new());
                row_width = 0;
            }
            if idx == self.cursor {
                cursor = Some((rows.len() - 1, row_width));
            }
            if let Some(row) = rows.last_mut() {
                row.push(shown);
            }
            row_width += w;
        }

        let cursor = cursor.unwrap_or_else(|| {
            if row_width >= width {
                rows.push(String::new());
                (rows.len() - 1, 0)
            } else {
                (rows.len() - 1, row_width)
            }
        });

        WrappedText { rows, cursor }
    }
}

/// Character as drawn and its width. Control characters become a space.
fn display_char(c: char) -> (char, usize) {
    match c.width() {
        Some(w) if !c.is_control() => (c, w),
        _ => (' ', 1),
    }
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}
