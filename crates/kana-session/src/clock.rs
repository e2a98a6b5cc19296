use tracing::debug;

use kana_core::mode::Budget;

use super::types::{
    rate, secs, Phase, SessionEvent, SessionResult, SessionState, Typing, COUNTDOWN_STEP_MS,
};
use super::TrainerSession;

enum Transition {
    CountdownStep,
    BeginTyping,
    TimeUp,
}

impl TrainerSession {
    /// Advance timers to `now_ms`. Catches up on every transition that is due,
    /// so a late tick still walks the countdown one step at a time.
    pub fn tick(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Some(transition) = self.due_transition(now_ms) {
            match transition {
                Transition::CountdownStep => {
                    if let SessionState::Countdown { remaining, next_at } = &mut self.state {
                        *remaining -= 1;
                        *next_at += if *remaining == 0 {
                            self.config.go_hold_ms
                        } else {
                            COUNTDOWN_STEP_MS
                        };
                        events.push(SessionEvent::PhaseChanged(Phase::Countdown(*remaining)));
                    }
                }
                Transition::BeginTyping => {
                    let round = self.new_round(now_ms);
                    let display = round.word.display.clone();
                    self.state = SessionState::Typing(Typing {
                        started_at: now_ms,
                        round,
                    });
                    debug!(mode = %self.mode, "typing started");
                    events.push(SessionEvent::PhaseChanged(Phase::Typing));
                    events.push(SessionEvent::RoundStarted { display });
                }
                Transition::TimeUp => events.extend(self.finish(now_ms)),
            }
        }
        events
    }

    fn due_transition(&self, now_ms: u64) -> Option<Transition> {
        match &self.state {
            SessionState::Countdown { remaining, next_at } if now_ms >= *next_at => {
                Some(if *remaining > 0 {
                    Transition::CountdownStep
                } else {
                    Transition::BeginTyping
                })
            }
            SessionState::Typing(t) => match self.mode.budget() {
                Budget::Time(limit)
                    if u128::from(now_ms.saturating_sub(t.started_at)) >= limit.as_millis() =>
                {
                    Some(Transition::TimeUp)
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// End the session and freeze its result.
    pub(crate) fn finish(&mut self, now_ms: u64) -> Vec<SessionEvent> {
        let SessionState::Typing(t) = &self.state else {
            return Vec::new();
        };
        let mut elapsed = now_ms.saturating_sub(t.started_at);
        if let Budget::Time(limit) = self.mode.budget() {
            // Time-boxed sessions never report more than their budget.
            elapsed = elapsed.min(limit.as_millis() as u64);
        }
        let result = SessionResult {
            mode: self.mode,
            words_completed: self.stats.words_completed,
            elapsed_secs: secs(elapsed),
            chars_typed: self.stats.chars_typed,
            chars_per_sec: rate(self.stats.chars_typed, elapsed),
        };
        debug!(
            words = result.words_completed,
            chars = result.chars_typed,
            elapsed_secs = result.elapsed_secs,
            "session finished"
        );
        self.state = SessionState::Result(result.clone());
        vec![
            SessionEvent::PhaseChanged(Phase::Result),
            SessionEvent::SessionFinished(result),
        ]
    }
}
