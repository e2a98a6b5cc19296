//! Kana-to-romaji expansion engine.
//!
//! A fixed table maps kana units (and two-unit digraphs) to accepted
//! spellings; the expander turns a whole reading into every complete
//! spelling, handling sokuon (っ), hatsuon (ん) and embedded Latin runs.

mod config;
mod expand;
mod table;

pub use config::{parse_romaji_toml, RomajiConfigError};
pub use expand::{
    candidates_for, candidates_with, expand, expand_with, filter_trailing_nasal, CandidateSet,
    ExpandError, NASAL_DOUBLE, NASAL_SINGLE,
};
pub use table::{default_toml, SyllableTable, CHOUON, DEFAULT_TOML, HATSUON, SOKUON};
