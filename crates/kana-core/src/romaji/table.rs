use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::parse_romaji_toml;

pub const DEFAULT_TOML: &str = include_str!("default_romaji.toml");

/// Gemination mark: doubles the first letter of whatever follows.
pub const SOKUON: char = 'っ';
/// Syllabic nasal, spelled `n` or `nn` depending on context.
pub const HATSUON: char = 'ん';
/// Long-vowel mark.
pub const CHOUON: char = 'ー';

/// Returns the embedded mapping TOML.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

/// Kana unit (or digraph) → accepted romaji spellings.
pub struct SyllableTable {
    entries: HashMap<String, Vec<String>>,
}

impl SyllableTable {
    /// Get or initialize the global singleton built from the embedded table.
    pub fn global() -> &'static SyllableTable {
        static INSTANCE: OnceLock<SyllableTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let map = parse_romaji_toml(DEFAULT_TOML).expect("romaji TOML must be valid");
            SyllableTable::from_entries(map)
        })
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Spellings for a one-unit key or two-unit digraph, in preference order.
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// True when `unit` can start an expansion on its own.
    pub fn covers(&self, unit: char) -> bool {
        let mut buf = [0u8; 4];
        unit == SOKUON
            || unit == HATSUON
            || unit.is_ascii_alphabetic()
            || self.entries.contains_key(&*unit.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel() {
        let table = SyllableTable::global();
        assert_eq!(table.lookup("あ"), Some(&["a".to_string()][..]));
    }

    #[test]
    fn test_alternates_keep_order() {
        let table = SyllableTable::global();
        assert_eq!(table.lookup("し").unwrap(), ["shi", "si"]);
        assert_eq!(table.lookup("じゃ").unwrap(), ["ja", "jya", "zya"]);
        assert_eq!(table.lookup("を").unwrap(), ["wo", "o"]);
    }

    #[test]
    fn test_digraph_is_a_key() {
        let table = SyllableTable::global();
        assert_eq!(table.lookup("きゃ").unwrap(), ["kya"]);
        assert_eq!(table.lookup("てぃ").unwrap(), ["thi"]);
    }

    #[test]
    fn test_marks() {
        let table = SyllableTable::global();
        assert_eq!(table.lookup("ー").unwrap(), ["-"]);
        assert!(table.lookup("っ").unwrap().is_empty());
    }

    #[test]
    fn test_small_ya_alone_is_not_a_key() {
        let table = SyllableTable::global();
        assert_eq!(table.lookup("ゃ"), None);
        assert!(!table.covers('ゃ'));
    }

    #[test]
    fn test_covers_special_units() {
        let table = SyllableTable::global();
        assert!(table.covers(SOKUON));
        assert!(table.covers(HATSUON));
        assert!(table.covers('A'));
        assert!(table.covers('か'));
        assert!(!table.covers('漢'));
    }

    #[test]
    fn test_every_spelling_is_typeable() {
        let map = parse_romaji_toml(DEFAULT_TOML).unwrap();
        for (kana, spellings) in &map {
            for s in spellings {
                assert!(
                    s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-'),
                    "bad spelling {s:?} for {kana}"
                );
            }
        }
    }
}
