//! Locale-aware integer formatting.

/// Group separator used by `sv-SE` (no-break space).
const SV_GROUP_SEPARATOR: char = '\u{a0}';

/// Format `value` the way `sv-SE` writes integers: `1234567` → `"1 234 567"`
/// with no-break spaces between groups of three digits.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * SV_GROUP_SEPARATOR.len_utf8());

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(SV_GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
