//! Character-level Unicode classification for readings and display text.

use unicode_width::UnicodeWidthStr;

use crate::romaji::CHOUON;

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check that a string only uses characters a reading may contain:
/// hiragana, the prolonged sound mark ー, and embedded Latin letters.
pub fn is_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == CHOUON || is_latin(c))
}

/// Terminal column width of `s` (kana and kanji take two columns).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reading() {
        assert!(is_reading("かんじ"));
        assert!(is_reading("らーめん"));
        assert!(is_reading("dvdをみる"));
        assert!(!is_reading("カタカナ"));
        assert!(!is_reading("漢字"));
        assert!(!is_reading(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(!is_hiragana('ー'));
        assert!(is_latin('a'));
        assert!(!is_latin('あ'));
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("学校"), 4);
        assert_eq!(display_width("ra-men"), 6);
    }
}
