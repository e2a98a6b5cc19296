//! Incremental matching of keystrokes against a round's candidate set.
//!
//! Acceptance is always evaluated against the whole [`CandidateSet`]; the
//! [`Projection`] only decides which spelling is drawn on screen.

use tracing::trace;

use crate::romaji::CandidateSet;

/// Outcome of feeding one key to [`step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    pub accepted: bool,
    /// Typed prefix after the key: extended when accepted, unchanged otherwise.
    pub prefix: String,
    pub complete: bool,
}

/// Feed one key. The key is lower-cased before matching.
pub fn step(candidates: &CandidateSet, typed: &str, key: char) -> StepResult {
    let mut next = String::with_capacity(typed.len() + key.len_utf8());
    next.push_str(typed);
    next.extend(key.to_lowercase());

    if !candidates.has_prefix(&next) {
        trace!(typed, ?key, "rejected key");
        return StepResult {
            accepted: false,
            prefix: typed.to_string(),
            complete: false,
        };
    }

    let complete = candidates.contains(&next);
    StepResult {
        accepted: true,
        prefix: next,
        complete,
    }
}

/// Typed / next / remaining split of the spelling currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Projection<'a> {
    pub done: &'a str,
    pub next: &'a str,
    pub remaining: &'a str,
}

/// Split the active candidate for display.
///
/// The active candidate is the first member (expansion order) starting with
/// `typed`, falling back to the first member overall.
pub fn project<'a>(candidates: &'a CandidateSet, typed: &str) -> Projection<'a> {
    let Some(candidate) = candidates
        .find_prefixed(typed)
        .or_else(|| candidates.first())
    else {
        return Projection::default();
    };

    let split = floor_char_boundary(candidate, typed.len());
    let (done, rest) = candidate.split_at(split);
    let next_len = rest.chars().next().map_or(0, char::len_utf8);
    let (next, remaining) = rest.split_at(next_len);
    Projection {
        done,
        next,
        remaining,
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingInput,
    Complete,
}

/// Per-round matcher: owns the candidate set and the typed prefix.
#[derive(Debug, Clone)]
pub struct Matcher {
    candidates: CandidateSet,
    typed: String,
    state: MatchState,
    accepted: usize,
    rejected: usize,
}

impl Matcher {
    pub fn new(candidates: CandidateSet) -> Self {
        Self {
            candidates,
            typed: String::new(),
            state: MatchState::AwaitingInput,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Feed one key. Once the round is complete, further keys are ignored.
    pub fn press(&mut self, key: char) -> StepResult {
        if self.state == MatchState::Complete {
            return StepResult {
                accepted: false,
                prefix: self.typed.clone(),
                complete: true,
            };
        }

        let result = step(&self.candidates, &self.typed, key);
        if result.accepted {
            self.accepted += 1;
            self.typed.clone_from(&result.prefix);
            if result.complete {
                self.state = MatchState::Complete;
            }
        } else {
            self.rejected += 1;
        }
        result
    }

    pub fn projection(&self) -> Projection<'_> {
        project(&self.candidates, &self.typed)
    }

    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == MatchState::Complete
    }

    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn rejected(&self) -> usize {
        self.rejected
    }
}
