use std::collections::HashSet;

use tracing::debug;

use super::table::{SyllableTable, HATSUON, SOKUON};

/// Spellings of ん before a consonant (`n`) and in all other positions (`nn`).
pub const NASAL_SINGLE: &str = "n";
pub const NASAL_DOUBLE: &str = "nn";

/// Deduplicated set of full romaji spellings for one reading.
///
/// Iteration follows expansion order, which is what the display projection
/// uses to pick the spelling shown to the player. Membership and prefix
/// queries ignore order.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    items: Vec<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `spelling` unless it is already present.
    pub fn insert(&mut self, spelling: String) -> bool {
        if self.contains(&spelling) {
            return false;
        }
        self.items.push(spelling);
        true
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.items.iter().any(|s| s == spelling)
    }

    /// True if at least one member starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.items.iter().any(|s| s.starts_with(prefix))
    }

    /// First member (in expansion order) that starts with `prefix`.
    pub fn find_prefixed(&self, prefix: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|s| s.starts_with(prefix))
            .map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn retain<F: FnMut(&str) -> bool>(&mut self, mut f: F) {
        self.items.retain(|s| f(s));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl FromIterator<String> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut seen = HashSet::new();
        let items = iter
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .collect();
        Self { items }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    #[error("unsupported kana unit {unit:?} at character {offset}")]
    UnsupportedUnit { unit: char, offset: usize },
    #[error("reading {reading:?} has no complete spelling")]
    NoCandidates { reading: String },
}

/// Expand a reading into every accepted romaji spelling, using the built-in table.
///
/// Returns an empty set only when the reading contains a unit the table does
/// not cover (or ends in a bare gemination mark).
pub fn expand(reading: &str) -> CandidateSet {
    expand_with(SyllableTable::global(), reading)
}

pub fn expand_with(table: &SyllableTable, reading: &str) -> CandidateSet {
    expand_rec(table, reading).into_iter().collect()
}

fn expand_rec(table: &SyllableTable, reading: &str) -> Vec<String> {
    let mut chars = reading.chars();
    let Some(first) = chars.next() else {
        return vec![String::new()];
    };
    let rest = chars.as_str();
    let mut out = Vec::new();

    if first == SOKUON {
        // Double the first letter of the tail; nothing to double → no spelling.
        for tail in expand_rec(table, rest) {
            if let Some(c) = tail.chars().next() {
                let mut s = String::with_capacity(tail.len() + c.len_utf8());
                s.push(c);
                s.push_str(&tail);
                out.push(s);
            }
        }
        return dedup(out);
    }

    if first.is_ascii_alphabetic() {
        for tail in expand_rec(table, rest) {
            let mut s = String::with_capacity(tail.len() + 1);
            s.push(first);
            s.push_str(&tail);
            out.push(s);
        }
        return dedup(out);
    }

    if first == HATSUON {
        for tail in expand_rec(table, rest) {
            if tail.is_empty() || tail.starts_with(NASAL_SINGLE) {
                out.push(format!("{NASAL_DOUBLE}{tail}"));
            } else {
                out.push(format!("{NASAL_SINGLE}{tail}"));
                out.push(format!("{NASAL_DOUBLE}{tail}"));
            }
        }
        return dedup(out);
    }

    // Digraph first, then the single unit; both interpretations are kept.
    if let Some(second) = chars.next() {
        let two = &reading[..first.len_utf8() + second.len_utf8()];
        if let Some(heads) = table.lookup(two) {
            for tail in expand_rec(table, chars.as_str()) {
                for head in heads {
                    out.push(format!("{head}{tail}"));
                }
            }
        }
    }

    let one = &reading[..first.len_utf8()];
    if let Some(heads) = table.lookup(one) {
        for tail in expand_rec(table, rest) {
            for head in heads {
                out.push(format!("{head}{tail}"));
            }
        }
    }

    dedup(out)
}

fn dedup(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

/// Keep only spellings that end in `nn`.
///
/// Applied to readings ending in ん: a trailing single `n` is still a prefix
/// of another syllable, so it cannot complete the word.
pub fn filter_trailing_nasal(set: &mut CandidateSet) {
    set.retain(|s| s.ends_with(NASAL_DOUBLE));
}

/// Prepare the candidate set for one round.
///
/// Expands `reading`, applies [`filter_trailing_nasal`] when the reading ends
/// in ん, and refuses readings that leave nothing to type.
pub fn candidates_for(reading: &str) -> Result<CandidateSet, ExpandError> {
    candidates_with(SyllableTable::global(), reading)
}

pub fn candidates_with(table: &SyllableTable, reading: &str) -> Result<CandidateSet, ExpandError> {
    let mut set = expand_with(table, reading);
    if reading.ends_with(HATSUON) {
        filter_trailing_nasal(&mut set);
    }
    // An empty spelling can never be completed by a keystroke.
    set.retain(|s| !s.is_empty());
    if set.is_empty() {
        if let Some((offset, unit)) = first_unsupported_unit(table, reading) {
            return Err(ExpandError::UnsupportedUnit { unit, offset });
        }
        return Err(ExpandError::NoCandidates {
            reading: reading.to_string(),
        });
    }
    debug!(reading, candidates = set.len(), "expanded reading");
    Ok(set)
}

/// Locate the first unit that neither the table nor a digraph with its
/// predecessor accounts for. Offsets count characters, not bytes.
fn first_unsupported_unit(table: &SyllableTable, reading: &str) -> Option<(usize, char)> {
    let chars: Vec<char> = reading.chars().collect();
    chars.iter().enumerate().find_map(|(i, &c)| {
        if table.covers(c) {
            return None;
        }
        let in_digraph = i > 0 && {
            let pair: String = [chars[i - 1], c].iter().collect();
            table.lookup(&pair).is_some()
        };
        (!in_digraph).then_some((i, c))
    })
}
