use tracing::debug;

use kana_core::matcher::Matcher;
use kana_core::romaji::candidates_for;

use super::types::{rate, secs, Round, RoundSummary};
use super::TrainerSession;

impl TrainerSession {
    /// Draw a word and build its matcher. Candidate sets are derived once here.
    pub(crate) fn new_round(&mut self, now_ms: u64) -> Round {
        let word = self.corpus.choose(&mut self.rng).clone();
        let candidates =
            candidates_for(&word.reading).expect("corpus words are validated on load");
        debug!(display = %word.display, reading = %word.reading, candidates = candidates.len(), "round started");
        Round {
            word,
            matcher: Matcher::new(candidates),
            started_at: now_ms,
        }
    }
}

impl Round {
    /// Summary of a completed round; updates nothing.
    pub(crate) fn summarize(&self, now_ms: u64) -> RoundSummary {
        let typed = self.matcher.typed().to_string();
        let elapsed = now_ms.saturating_sub(self.started_at);
        RoundSummary {
            display: self.word.display.clone(),
            reading: self.word.reading.clone(),
            spelling: self
                .matcher
                .candidates()
                .first()
                .unwrap_or_default()
                .to_string(),
            chars_per_sec: rate(typed.chars().count(), elapsed),
            seconds: secs(elapsed),
            rejected: self.matcher.rejected(),
            typed,
        }
    }
}
