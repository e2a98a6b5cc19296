use kana_core::matcher::{Projection, StepResult};
use kana_core::mode::SessionMode;
use kana_session::{
    KeyResponse, Phase, RoundSummary, SessionEvent, SessionResult, SessionView,
};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum KanaError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

impl From<kana_core::corpus::CorpusError> for KanaError {
    fn from(e: kana_core::corpus::CorpusError) -> Self {
        match e {
            kana_core::corpus::CorpusError::Io(_) => KanaError::Io { msg: e.to_string() },
            _ => KanaError::InvalidData { msg: e.to_string() },
        }
    }
}

impl From<kana_core::romaji::ExpandError> for KanaError {
    fn from(e: kana_core::romaji::ExpandError) -> Self {
        KanaError::InvalidData { msg: e.to_string() }
    }
}

// ---------------------------------------------------------------------------
// Records (value types, copied across FFI boundary)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaStep {
    pub accepted: bool,
    pub prefix: String,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaProjection {
    pub done: String,
    pub next: String,
    pub remaining: String,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaWord {
    pub display: String,
    pub reading: String,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaRoundSummary {
    pub display: String,
    pub reading: String,
    pub typed: String,
    pub spelling: String,
    pub seconds: f64,
    pub chars_per_sec: f64,
    pub rejected: u32,
}

#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaSessionResult {
    pub mode: KanaMode,
    pub words_completed: u32,
    pub elapsed_secs: f64,
    pub chars_typed: u32,
    pub chars_per_sec: f64,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaView {
    pub phase: KanaPhase,
    pub mode: KanaMode,
    pub mode_label: String,
    pub display: Option<String>,
    pub done: String,
    pub next: String,
    pub remaining: String,
    pub progress: f64,
    pub words_completed: u32,
    pub last_round: Option<KanaRoundSummary>,
    pub result: Option<KanaSessionResult>,
}

/// Event-driven response from handle_key / tick.
#[derive(Debug, Clone, PartialEq, uniffi::Record)]
pub struct KanaKeyResponse {
    pub accepted: bool,
    pub events: Vec<KanaEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum KanaMode {
    Time30,
    Time60,
    Time120,
    Words30,
    Words50,
    Words100,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum KanaPhase {
    Start,
    /// `seconds == 0` is the "GO!" frame.
    Countdown { seconds: u32 },
    Typing,
    Result,
}

#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum KanaEvent {
    PhaseChanged { phase: KanaPhase },
    ModeChanged { mode: KanaMode },
    RoundStarted { display: String },
    RoundCompleted { summary: KanaRoundSummary },
    SessionFinished { result: KanaSessionResult },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

impl From<SessionMode> for KanaMode {
    fn from(mode: SessionMode) -> Self {
        match mode {
            SessionMode::Time30 => KanaMode::Time30,
            SessionMode::Time60 => KanaMode::Time60,
            SessionMode::Time120 => KanaMode::Time120,
            SessionMode::Words30 => KanaMode::Words30,
            SessionMode::Words50 => KanaMode::Words50,
            SessionMode::Words100 => KanaMode::Words100,
        }
    }
}

impl From<KanaMode> for SessionMode {
    fn from(mode: KanaMode) -> Self {
        match mode {
            KanaMode::Time30 => SessionMode::Time30,
            KanaMode::Time60 => SessionMode::Time60,
            KanaMode::Time120 => SessionMode::Time120,
            KanaMode::Words30 => SessionMode::Words30,
            KanaMode::Words50 => SessionMode::Words50,
            KanaMode::Words100 => SessionMode::Words100,
        }
    }
}

impl From<Phase> for KanaPhase {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Start => KanaPhase::Start,
            Phase::Countdown(seconds) => KanaPhase::Countdown { seconds },
            Phase::Typing => KanaPhase::Typing,
            Phase::Result => KanaPhase::Result,
        }
    }
}

impl From<StepResult> for KanaStep {
    fn from(r: StepResult) -> Self {
        Self {
            accepted: r.accepted,
            prefix: r.prefix,
            complete: r.complete,
        }
    }
}

impl From<Projection<'_>> for KanaProjection {
    fn from(p: Projection<'_>) -> Self {
        Self {
            done: p.done.to_string(),
            next: p.next.to_string(),
            remaining: p.remaining.to_string(),
        }
    }
}

impl From<RoundSummary> for KanaRoundSummary {
    fn from(s: RoundSummary) -> Self {
        Self {
            display: s.display,
            reading: s.reading,
            typed: s.typed,
            spelling: s.spelling,
            seconds: s.seconds,
            chars_per_sec: s.chars_per_sec,
            rejected: saturating_u32(s.rejected),
        }
    }
}

impl From<SessionResult> for KanaSessionResult {
    fn from(r: SessionResult) -> Self {
        Self {
            mode: r.mode.into(),
            words_completed: r.words_completed,
            elapsed_secs: r.elapsed_secs,
            chars_typed: saturating_u32(r.chars_typed),
            chars_per_sec: r.chars_per_sec,
        }
    }
}

impl From<SessionView> for KanaView {
    fn from(v: SessionView) -> Self {
        Self {
            phase: v.phase.into(),
            mode: v.mode.into(),
            mode_label: v.mode.label().to_string(),
            display: v.display,
            done: v.done,
            next: v.next,
            remaining: v.remaining,
            progress: v.progress,
            words_completed: v.words_completed,
            last_round: v.last_round.map(Into::into),
            result: v.result.map(Into::into),
        }
    }
}

impl From<SessionEvent> for KanaEvent {
    fn from(e: SessionEvent) -> Self {
        match e {
            SessionEvent::PhaseChanged(phase) => KanaEvent::PhaseChanged {
                phase: phase.into(),
            },
            SessionEvent::ModeChanged(mode) => KanaEvent::ModeChanged { mode: mode.into() },
            SessionEvent::RoundStarted { display } => KanaEvent::RoundStarted { display },
            SessionEvent::RoundCompleted(summary) => KanaEvent::RoundCompleted {
                summary: summary.into(),
            },
            SessionEvent::SessionFinished(result) => KanaEvent::SessionFinished {
                result: result.into(),
            },
        }
    }
}

pub(super) fn convert_to_events(resp: KeyResponse) -> KanaKeyResponse {
    KanaKeyResponse {
        accepted: resp.accepted,
        events: resp.events.into_iter().map(Into::into).collect(),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
