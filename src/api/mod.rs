//! UniFFI export layer: type-safe bindings for trainer hosts.
//!
//! Each public type here maps to a generated class, struct, or enum on the
//! host side.

mod session;
mod types;

pub use session::{KanaCorpus, KanaSession};
pub use types::{
    KanaError, KanaEvent, KanaKeyResponse, KanaMode, KanaPhase, KanaProjection,
    KanaRoundSummary, KanaSessionResult, KanaStep, KanaView, KanaWord,
};

use std::path::Path;

use kana_core::matcher;
use kana_core::romaji::{self, CandidateSet};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Raw expansion, without the trailing-nasal filter.
#[uniffi::export]
fn expand_reading(reading: String) -> Vec<String> {
    romaji::expand(&reading).into_vec()
}

/// Candidate set for one round: expansion plus the trailing-nasal filter.
#[uniffi::export]
fn prepare_candidates(reading: String) -> Result<Vec<String>, KanaError> {
    Ok(romaji::candidates_for(&reading)?.into_vec())
}

#[uniffi::export]
fn match_step(candidates: Vec<String>, typed: String, key: String) -> KanaStep {
    let set: CandidateSet = candidates.into_iter().collect();
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => matcher::step(&set, &typed, c).into(),
        _ => KanaStep {
            accepted: false,
            prefix: typed,
            complete: false,
        },
    }
}

#[uniffi::export]
fn project(candidates: Vec<String>, typed: String) -> KanaProjection {
    let set: CandidateSet = candidates.into_iter().collect();
    matcher::project(&set, &typed).into()
}

#[uniffi::export]
fn mode_label(mode: KanaMode) -> String {
    kana_core::mode::SessionMode::from(mode).label().to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), KanaError> {
    let content = std::fs::read_to_string(&path).map_err(|e| KanaError::Io {
        msg: format!("{path}: {e}"),
    })?;
    kana_core::settings::init_custom(content)
        .map_err(|e| KanaError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    kana_core::settings::DEFAULT_SETTINGS_TOML.to_string()
}

#[uniffi::export]
fn romaji_default_config() -> String {
    romaji::default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
