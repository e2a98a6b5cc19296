mod basic;
mod simulator;

use std::sync::Arc;

use kana_core::corpus::{Corpus, Word};

use super::SessionConfig;

pub(super) const TEST_CONFIG: SessionConfig = SessionConfig {
    countdown_secs: 3,
    go_hold_ms: 1000,
};

/// Corpus built from `(display, reading)` pairs.
pub(super) fn make_corpus(words: &[(&str, &str)]) -> Arc<Corpus> {
    let words = words
        .iter()
        .map(|&(display, reading)| Word::new(display, reading))
        .collect();
    Arc::new(Corpus::new(words).unwrap())
}

pub(super) fn gakkou_corpus() -> Arc<Corpus> {
    make_corpus(&[("学校", "がっこう")])
}
