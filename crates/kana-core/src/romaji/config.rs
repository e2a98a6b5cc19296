use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::SOKUON;

#[derive(Deserialize)]
struct RomajiConfig {
    mappings: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be one or two kana units: {0:?}")]
    InvalidKey(String),
    #[error("no spellings for key: {0}")]
    EmptySpellings(String),
    #[error("invalid spelling {spelling:?} for key {key}")]
    InvalidSpelling { key: String, spelling: String },
}

/// Parse TOML text into a sorted `BTreeMap<kana, spellings>`.
///
/// Spelling order inside each entry is preserved; the first spelling is the
/// one shown to the player when nothing has been typed yet.
pub fn parse_romaji_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, RomajiConfigError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(RomajiConfigError::Empty);
    }

    for (key, spellings) in &config.mappings {
        let units = key.chars().count();
        if units == 0 || units > 2 {
            return Err(RomajiConfigError::InvalidKey(key.clone()));
        }
        if spellings.is_empty() {
            // Only the gemination mark is allowed to have no spelling of its own.
            if key.chars().eq([SOKUON]) {
                continue;
            }
            return Err(RomajiConfigError::EmptySpellings(key.clone()));
        }
        for spelling in spellings {
            if !is_valid_spelling(spelling) {
                return Err(RomajiConfigError::InvalidSpelling {
                    key: key.clone(),
                    spelling: spelling.clone(),
                });
            }
        }
    }

    Ok(config.mappings)
}

fn is_valid_spelling(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
"あ" = ["a"]
"し" = ["shi", "si"]
"#;
        let map = parse_romaji_toml(toml).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["あ"], vec!["a"]);
        assert_eq!(map["し"], vec!["shi", "si"]);
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_romaji_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 120, "expected 120+ mappings, got {}", map.len());
        assert!(map["っ"].is_empty());
        assert_eq!(map["ー"], vec!["-"]);
    }

    #[test]
    fn sokuon_may_be_empty() {
        let toml = "[mappings]\n\"っ\" = []\n";
        assert!(parse_romaji_toml(toml).is_ok());
    }

    #[test]
    fn error_empty_mappings() {
        let toml = "[mappings]\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::Empty));
    }

    #[test]
    fn error_long_key() {
        let toml = "[mappings]\n\"きゃう\" = [\"kyau\"]\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_spellings() {
        let toml = "[mappings]\n\"か\" = []\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::EmptySpellings(_)));
    }

    #[test]
    fn error_uppercase_spelling() {
        let toml = "[mappings]\n\"か\" = [\"KA\"]\n";
        let err = parse_romaji_toml(toml).unwrap_err();
        assert!(matches!(err, RomajiConfigError::InvalidSpelling { .. }));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_romaji_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, RomajiConfigError::Parse(_)));
    }
}
