use std::fs;

use kana_engine::{romaji, settings};

/// Install a custom settings file for the rest of the process.
pub fn load_settings(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(settings::init_custom(content), "Error in {file}: {}");
}

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(romaji::parse_romaji_toml(&content), "Error: {}");
    let digraphs = map.keys().filter(|k| k.chars().count() == 2).count();
    println!(
        "OK: {} mappings ({} digraphs)",
        map.len(),
        digraphs
    );
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: session.countdown_secs={}, session.go_hold_ms={}, session.default_mode={}, corpus.path={}",
        s.session.countdown_secs,
        s.session.go_hold_ms,
        s.session.default_mode,
        s.corpus
            .path()
            .map_or_else(|| "(builtin)".to_string(), |p| p.display().to_string()),
    );
}
