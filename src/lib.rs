//! Host-facing facade of the kana typing trainer.
//!
//! Re-exports the core and session crates and exposes them over UniFFI so a
//! Swift, Kotlin or web front end can act as the host.

uniffi::setup_scaffolding!();

pub mod api;
pub mod trace_init;

pub use kana_core::{corpus, matcher, mode, romaji, settings, unicode};
pub use kana_session as session;
