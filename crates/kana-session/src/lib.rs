//! Typing-trainer session: start → countdown → typing → result.
//!
//! `TrainerSession` owns the per-round matcher and the session counters. The
//! host feeds it key events and periodic ticks, each stamped with a monotonic
//! millisecond clock, and redraws from `view()`.

pub(crate) mod types;

mod clock;
mod key_handlers;
mod round;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use kana_core::corpus::Corpus;
use kana_core::mode::{Budget, SessionMode};
use kana_core::settings::settings;

pub use types::{
    KeyEvent, KeyResponse, Phase, RoundSummary, SessionConfig, SessionEvent, SessionResult,
    SessionView,
};

use types::{SessionState, SessionStats};

pub struct TrainerSession {
    corpus: Arc<Corpus>,
    rng: StdRng,
    config: SessionConfig,
    mode: SessionMode,
    state: SessionState,
    stats: SessionStats,
    last_round: Option<RoundSummary>,
}

impl TrainerSession {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_rng(corpus, StdRng::from_entropy())
    }

    /// Deterministic word order, for tests and replays.
    pub fn seeded(corpus: Arc<Corpus>, seed: u64) -> Self {
        Self::with_rng(corpus, StdRng::seed_from_u64(seed))
    }

    fn with_rng(corpus: Arc<Corpus>, rng: StdRng) -> Self {
        Self {
            corpus,
            rng,
            config: SessionConfig::default(),
            mode: settings().session.default_mode,
            state: SessionState::Start,
            stats: SessionStats::default(),
            last_round: None,
        }
    }

    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// Change the mode. Only allowed on the start screen.
    pub fn set_mode(&mut self, mode: SessionMode) -> bool {
        if !matches!(self.state, SessionState::Start) {
            return false;
        }
        self.mode = mode;
        true
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            SessionState::Start => Phase::Start,
            SessionState::Countdown { remaining, .. } => Phase::Countdown(*remaining),
            SessionState::Typing(_) => Phase::Typing,
            SessionState::Result(_) => Phase::Result,
        }
    }

    pub fn result(&self) -> Option<&SessionResult> {
        match &self.state {
            SessionState::Result(r) => Some(r),
            _ => None,
        }
    }

    pub fn words_completed(&self) -> u32 {
        self.stats.words_completed
    }

    pub fn chars_typed(&self) -> usize {
        self.stats.chars_typed
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.last_round.as_ref()
    }

    /// Snapshot for rendering at time `now_ms`.
    pub fn view(&self, now_ms: u64) -> SessionView {
        let mut view = SessionView {
            phase: self.phase(),
            mode: self.mode,
            display: None,
            done: String::new(),
            next: String::new(),
            remaining: String::new(),
            progress: 1.0,
            words_completed: self.stats.words_completed,
            last_round: self.last_round.clone(),
            result: self.result().cloned(),
        };
        match &self.state {
            SessionState::Typing(t) => {
                let p = t.round.matcher.projection();
                view.display = Some(t.round.word.display.clone());
                view.done = p.done.to_string();
                view.next = p.next.to_string();
                view.remaining = p.remaining.to_string();
                view.progress = self.progress(now_ms.saturating_sub(t.started_at));
            }
            SessionState::Result(_) => view.progress = 0.0,
            SessionState::Start | SessionState::Countdown { .. } => {}
        }
        view
    }

    /// Remaining budget as a fraction of the whole, clamped to 0..=1.
    fn progress(&self, elapsed_ms: u64) -> f64 {
        let ratio = match self.mode.budget() {
            Budget::Time(limit) => {
                let limit_ms = limit.as_millis() as f64;
                (limit_ms - elapsed_ms as f64) / limit_ms
            }
            Budget::Words(n) => f64::from(n.saturating_sub(self.stats.words_completed)) / f64::from(n),
        };
        ratio.clamp(0.0, 1.0)
    }
}
