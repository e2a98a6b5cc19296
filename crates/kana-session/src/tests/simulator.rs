use std::sync::Arc;

use kana_core::corpus::Corpus;
use kana_core::mode::SessionMode;

use super::TEST_CONFIG;
use crate::{KeyEvent, KeyResponse, Phase, SessionEvent, TrainerSession};

/// Headless host for integration tests.
///
/// Owns a fake millisecond clock and drives the session the way a UI would:
/// key events and ticks, both stamped with the current time.
pub(super) struct HeadlessTrainer {
    pub session: TrainerSession,
    pub now: u64,
}

impl HeadlessTrainer {
    pub fn new(corpus: Arc<Corpus>, mode: SessionMode) -> Self {
        let mut session = TrainerSession::seeded(corpus, 42);
        session.set_config(TEST_CONFIG);
        assert!(session.set_mode(mode));
        Self { session, now: 0 }
    }

    pub fn press(&mut self, event: KeyEvent) -> KeyResponse {
        self.session.handle_key(event, self.now)
    }

    pub fn advance(&mut self, ms: u64) -> Vec<SessionEvent> {
        self.now += ms;
        self.session.tick(self.now)
    }

    /// Space, then wait out the countdown and the "GO!" frame.
    pub fn start(&mut self) -> Vec<SessionEvent> {
        let mut events = self.press(KeyEvent::Space).events;
        for _ in 0..TEST_CONFIG.countdown_secs {
            events.extend(self.advance(1000));
        }
        events.extend(self.advance(TEST_CONFIG.go_hold_ms));
        assert_eq!(self.session.phase(), Phase::Typing);
        events
    }

    pub fn type_str(&mut self, s: &str) -> Vec<KeyResponse> {
        s.chars().map(|c| self.press(KeyEvent::Char(c))).collect()
    }

    /// Type the spelling currently on screen; completes the round.
    pub fn type_current_word(&mut self) -> Vec<KeyResponse> {
        let view = self.session.view(self.now);
        let target = format!("{}{}{}", view.done, view.next, view.remaining);
        let typed = target[view.done.len()..].to_string();
        self.type_str(&typed)
    }

    pub fn rounds_completed(responses: &[KeyResponse]) -> usize {
        responses
            .iter()
            .flat_map(|r| &r.events)
            .filter(|e| matches!(e, SessionEvent::RoundCompleted(_)))
            .count()
    }
}
