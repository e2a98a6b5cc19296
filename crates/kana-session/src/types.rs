use kana_core::corpus::Word;
use kana_core::matcher::Matcher;
use kana_core::mode::SessionMode;
use kana_core::settings::settings;

pub(crate) const COUNTDOWN_STEP_MS: u64 = 1000;

/// Key event delivered by the host. Only `Char` reaches the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Char(char),
    Space,
    Enter,
    Tab,
    /// Arrows, function keys, bare modifiers and so on.
    Other,
}

impl KeyEvent {
    /// Classify the text a host key event produced.
    pub fn text(text: &str) -> Self {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(' '), None) => Self::Space,
            (Some('\t'), None) => Self::Tab,
            (Some('\r' | '\n'), None) => Self::Enter,
            (Some(c), None) if !c.is_control() => Self::Char(c),
            _ => Self::Other,
        }
    }
}

/// Host-visible phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Mode picker; Space starts the countdown.
    Start,
    /// Seconds left before typing; `Countdown(0)` is the "GO!" frame.
    Countdown(u32),
    Typing,
    Result,
}

/// Timing and outcome of one completed word.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub display: String,
    pub reading: String,
    /// Spelling the player actually typed.
    pub typed: String,
    /// Default spelling (first candidate), shown as the reference romaji.
    pub spelling: String,
    pub seconds: f64,
    pub chars_per_sec: f64,
    pub rejected: usize,
}

/// Final numbers of a session, frozen when it ends.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionResult {
    pub mode: SessionMode,
    pub words_completed: u32,
    pub elapsed_secs: f64,
    pub chars_typed: usize,
    pub chars_per_sec: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    PhaseChanged(Phase),
    ModeChanged(SessionMode),
    RoundStarted { display: String },
    RoundCompleted(RoundSummary),
    SessionFinished(SessionResult),
}

/// Response from `handle_key`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyResponse {
    /// The key did something: advanced the phase, changed the mode, or
    /// extended the typed prefix. Rejected keystrokes leave this false.
    pub accepted: bool,
    pub events: Vec<SessionEvent>,
}

impl KeyResponse {
    pub(crate) fn ignored() -> Self {
        Self {
            accepted: false,
            events: Vec::new(),
        }
    }

    pub(crate) fn accepted() -> Self {
        Self {
            accepted: true,
            ..Self::ignored()
        }
    }

    pub(crate) fn with_events(mut self, events: Vec<SessionEvent>) -> Self {
        self.events.extend(events);
        self
    }
}

/// Snapshot of everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub phase: Phase,
    pub mode: SessionMode,
    pub display: Option<String>,
    pub done: String,
    pub next: String,
    pub remaining: String,
    /// Remaining budget as a fraction of the whole, for the progress bar.
    pub progress: f64,
    pub words_completed: u32,
    pub last_round: Option<RoundSummary>,
    pub result: Option<SessionResult>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub countdown_secs: u32,
    pub go_hold_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        let s = &settings().session;
        Self {
            countdown_secs: s.countdown_secs,
            go_hold_ms: s.go_hold_ms,
        }
    }
}

pub(crate) enum SessionState {
    Start,
    Countdown { remaining: u32, next_at: u64 },
    Typing(Typing),
    Result(SessionResult),
}

pub(crate) struct Typing {
    pub(crate) started_at: u64,
    pub(crate) round: Round,
}

pub(crate) struct Round {
    pub(crate) word: Word,
    pub(crate) matcher: Matcher,
    pub(crate) started_at: u64,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SessionStats {
    pub(crate) words_completed: u32,
    pub(crate) chars_typed: usize,
}

/// Characters per second, or zero when no time has passed.
pub(crate) fn rate(chars: usize, millis: u64) -> f64 {
    if millis == 0 {
        0.0
    } else {
        chars as f64 * 1000.0 / millis as f64
    }
}

pub(crate) fn secs(millis: u64) -> f64 {
    millis as f64 / 1000.0
}
