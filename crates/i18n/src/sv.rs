use crate::{format_count, Translation};

/// Swedish strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Swedish;

const EXAMPLE_TEXT: &str = "Lorem ipsum dolor sit amet, consectetuer adipiscing elit. Aenean commodo ligula eget dolor. Aenean massa. Cum sociis natoque penatibus et magnis dis parturient montes, nascetur ridiculus mus. Donec quam felis, ultricies nec, pellentesque eu, pretium quis, sem. Nulla consequat massa quis enim. Donec pede justo, fringilla vel, aliquet nec, vulputate eget, arcu.";

impl Translation for Swedish {
    fn count_characters(&self, count: usize) -> String {
        format!("{} tecken", format_count(count))
    }

    fn count_words(&self, count: usize) -> String {
        format!("{} ord", format_count(count))
    }

    fn count_lines(&self, count: usize) -> String {
        let unit = if count == 1 { "rad" } else { "rader" };
        format!("{} {}", format_count(count), unit)
    }

    fn sound_on(&self) -> &'static str {
        "🔊 Ljud på"
    }

    fn sound_off(&self) -> &'static str {
        "🔇 Ljud av"
    }

    fn copy_succeeded(&self) -> &'static str {
        "✓ Text kopierad!"
    }

    fn copy_failed(&self) -> &'static str {
        "⚠ Kunde inte kopiera"
    }

    fn clear_title(&self) -> &'static str {
        "Rensa"
    }

    fn clear_confirm(&self) -> &'static str {
        "Är du säker på att du vill rensa texten?"
    }

    fn ui_yes(&self) -> &'static str {
        "Ja"
    }

    fn ui_no(&self) -> &'static str {
        "Nej"
    }

    fn app_title(&self) -> &'static str {
        "Teckenräknare"
    }

    fn theme_label(&self, name: &str) -> String {
        match name {
            "light" => "Ljust".to_string(),
            "dark" => "Mörkt".to_string(),
            "sepia" => "Sepia".to_string(),
            other => other.to_string(),
        }
    }

    fn sound_toggle(&self) -> &'static str {
        "Ljud"
    }

    fn action_example(&self) -> &'static str {
        "Exempeltext"
    }

    fn action_copy(&self) -> &'static str {
        "Kopiera"
    }

    fn action_clear(&self) -> &'static str {
        "Rensa"
    }

    fn action_quit(&self) -> &'static str {
        "Avsluta"
    }

    fn example_text(&self) -> &'static str {
        EXAMPLE_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_label_distinguishes_singular() {
        let sv = Swedish;
        assert_eq!(sv.count_lines(0), "0 rader");
        assert_eq!(sv.count_lines(1), "1 rad");
        assert_eq!(sv.count_lines(2), "2 rader");
    }

    #[test]
    fn test_character_and_word_labels_have_no_plural() {
        let sv = Swedish;
        assert_eq!(sv.count_characters(1), "1 tecken");
        assert_eq!(sv.count_characters(1500), "1\u{a0}500 tecken");
        assert_eq!(sv.count_words(1), "1 ord");
        assert_eq!(sv.count_words(3), "3 ord");
    }
}
