//! Word list: `(display, reading)` pairs the trainer draws from.
//!
//! Every word is validated on load so a session never presents a word that
//! has nothing typeable.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::romaji::{candidates_for, ExpandError};
use crate::settings::settings;
use crate::unicode::is_reading;

pub const BUILTIN_CORPUS_JSON: &str = include_str!("../data/words.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    /// Text shown to the player (may contain kanji or katakana).
    pub display: String,
    /// Hiragana reading the romaji candidates are derived from.
    pub reading: String,
}

impl Word {
    pub fn new(display: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            reading: reading.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("corpus has no words")]
    Empty,
    #[error("word {index}: {reading:?} is not a kana reading")]
    InvalidReading { index: usize, reading: String },
    #[error("word {index} ({reading:?}): {source}")]
    InvalidWord {
        index: usize,
        reading: String,
        #[source]
        source: ExpandError,
    },
    #[error("word {index} ({reading:?}): spelling {spelling:?} cannot be typed")]
    Untypeable {
        index: usize,
        reading: String,
        spelling: String,
    },
}

/// Validated, non-empty word list.
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
}

impl Corpus {
    pub fn new(words: Vec<Word>) -> Result<Self, CorpusError> {
        if words.is_empty() {
            return Err(CorpusError::Empty);
        }
        for (index, word) in words.iter().enumerate() {
            validate_word(index, word)?;
        }
        debug!(words = words.len(), "corpus loaded");
        Ok(Self { words })
    }

    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let words: Vec<Word> =
            serde_json::from_str(json).map_err(|e| CorpusError::Parse(e.to_string()))?;
        Self::new(words)
    }

    pub fn open(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// The embedded sample word list.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_CORPUS_JSON).expect("built-in corpus must be valid")
    }

    /// Corpus named by `[corpus] path` in the settings, or the built-in list.
    pub fn configured() -> Result<Self, CorpusError> {
        match settings().corpus.path() {
            Some(path) => Self::open(&path),
            None => Ok(Self::builtin()),
        }
    }

    /// Pick a word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        &self.words[rng.gen_range(0..self.words.len())]
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn validate_word(index: usize, word: &Word) -> Result<(), CorpusError> {
    if !is_reading(&word.reading) {
        return Err(CorpusError::InvalidReading {
            index,
            reading: word.reading.clone(),
        });
    }
    let candidates = candidates_for(&word.reading).map_err(|source| CorpusError::InvalidWord {
        index,
        reading: word.reading.clone(),
        source,
    })?;
    // Keys are lower-cased before matching, so upper-case Latin runs can never be typed.
    if let Some(bad) = candidates
        .iter()
        .find(|s| !s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-'))
    {
        return Err(CorpusError::Untypeable {
            index,
            reading: word.reading.clone(),
            spelling: bad.to_string(),
        });
    }
    Ok(())
}
