//! Document metrics.

/// Character, word and line counts of a text.
///
/// Always computed from scratch; there is no incremental state to drift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    /// UTF-16 code units, so characters outside the BMP count twice
    pub characters: usize,
    /// Maximal runs of non-whitespace
    pub words: usize,
    /// `\n`-separated segments, 0 for an empty text
    pub lines: usize,
}

impl Metrics {
    pub fn compute(text: &str) -> Self {
        let characters = text.encode_utf16().count();
        // Empty tokens come from leading, trailing and repeated separators
        let words = text
            .split(is_word_separator)
            .filter(|token| !token.is_empty())
            .count();
        let lines = if text.is_empty() {
            0
        } else {
            text.split('\n').count()
        };

        Self {
            characters,
            words,
            lines,
        }
    }

    /// Whether the document has any content (highlights the counter).
    pub fn has_content(&self) -> bool {
        self.characters > 0
    }
}

/// Whitespace as text fields and regular expressions see it: Unicode
/// `White_Space` without NEXT LINE, plus the byte order mark.
fn is_word_separator(c: char) -> bool {
    match c {
        '\u{feff}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}
