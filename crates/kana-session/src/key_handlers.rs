use tracing::{debug, debug_span};

use kana_core::mode::Budget;

use super::types::{
    KeyEvent, KeyResponse, Phase, SessionEvent, SessionState, SessionStats, COUNTDOWN_STEP_MS,
};
use super::TrainerSession;

impl TrainerSession {
    /// Process a key event at `now_ms`. Pending timers are applied first, so a
    /// key arriving after the time budget ran out is not counted.
    pub fn handle_key(&mut self, event: KeyEvent, now_ms: u64) -> KeyResponse {
        let _span = debug_span!("handle_key", ?event, now_ms).entered();

        let mut events = self.tick(now_ms);
        let resp = match (self.phase(), event) {
            (Phase::Start, KeyEvent::Space) => self.start_countdown(now_ms),
            (Phase::Start, KeyEvent::Tab) => {
                self.mode = self.mode.next();
                let mut r = KeyResponse::accepted();
                r.events.push(SessionEvent::ModeChanged(self.mode));
                r
            }
            (Phase::Typing, KeyEvent::Char(c)) => self.handle_typing_char(c, now_ms),
            (Phase::Result, KeyEvent::Enter | KeyEvent::Space) => self.retry(),
            _ => KeyResponse::ignored(),
        };
        events.extend(resp.events);
        KeyResponse {
            accepted: resp.accepted,
            events,
        }
    }

    fn start_countdown(&mut self, now_ms: u64) -> KeyResponse {
        let remaining = self.config.countdown_secs;
        self.state = SessionState::Countdown {
            remaining,
            next_at: now_ms + COUNTDOWN_STEP_MS,
        };
        self.stats = SessionStats::default();
        self.last_round = None;
        debug!(mode = %self.mode, "countdown started");
        KeyResponse::accepted().with_events(vec![SessionEvent::PhaseChanged(Phase::Countdown(
            remaining,
        ))])
    }

    fn handle_typing_char(&mut self, c: char, now_ms: u64) -> KeyResponse {
        let SessionState::Typing(t) = &mut self.state else {
            return KeyResponse::ignored();
        };
        let step = t.round.matcher.press(c);
        if !step.accepted {
            return KeyResponse::ignored();
        }
        if !step.complete {
            return KeyResponse::accepted();
        }

        let summary = t.round.summarize(now_ms);
        self.stats.words_completed += 1;
        self.stats.chars_typed += summary.typed.chars().count();
        debug!(
            display = %summary.display,
            typed = %summary.typed,
            seconds = summary.seconds,
            "round completed"
        );
        self.last_round = Some(summary.clone());

        let mut resp =
            KeyResponse::accepted().with_events(vec![SessionEvent::RoundCompleted(summary)]);
        let budget_spent = matches!(
            self.mode.budget(),
            Budget::Words(n) if self.stats.words_completed >= n
        );
        if budget_spent {
            resp.events.extend(self.finish(now_ms));
        } else {
            let round = self.new_round(now_ms);
            let display = round.word.display.clone();
            if let SessionState::Typing(t) = &mut self.state {
                t.round = round;
            }
            resp.events.push(SessionEvent::RoundStarted { display });
        }
        resp
    }

    /// Back to the start screen from the result screen.
    fn retry(&mut self) -> KeyResponse {
        self.state = SessionState::Start;
        self.stats = SessionStats::default();
        self.last_round = None;
        KeyResponse::accepted().with_events(vec![SessionEvent::PhaseChanged(Phase::Start)])
    }
}
