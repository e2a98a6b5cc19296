use toml::Value;

const SETTINGS: &str = "src/default_settings.toml";
const ROMAJI: &str = "src/romaji/default_romaji.toml";
const MODES: [&str; 6] = ["30s", "60s", "120s", "30", "50", "100"];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    println!("cargo:rerun-if-changed={ROMAJI}");

    check_settings(&parse(SETTINGS, include_str!("src/default_settings.toml")));
    check_romaji(&parse(ROMAJI, include_str!("src/romaji/default_romaji.toml")));
}

fn parse(path: &str, content: &str) -> Value {
    content
        .parse::<Value>()
        .unwrap_or_else(|e| panic!("{path} contains invalid TOML: {e}"))
}

fn check_settings(doc: &Value) {
    let session = doc
        .get("session")
        .and_then(Value::as_table)
        .unwrap_or_else(|| panic!("{SETTINGS}: missing [session]"));

    let countdown = session.get("countdown_secs").and_then(Value::as_integer);
    assert!(
        matches!(countdown, Some(1..=10)),
        "{SETTINGS}: session.countdown_secs must be an integer in 1..=10"
    );
    let go_hold = session.get("go_hold_ms").and_then(Value::as_integer);
    assert!(
        matches!(go_hold, Some(n) if n > 0),
        "{SETTINGS}: session.go_hold_ms must be a positive integer"
    );
    let mode = session.get("default_mode").and_then(Value::as_str);
    assert!(
        mode.is_some_and(|m| MODES.contains(&m)),
        "{SETTINGS}: session.default_mode must be one of {MODES:?}"
    );

    if let Some(corpus) = doc.get("corpus") {
        let path = corpus.get("path");
        assert!(
            path.map_or(true, Value::is_str),
            "{SETTINGS}: corpus.path must be a string"
        );
    }
}

fn check_romaji(doc: &Value) {
    let mappings = doc
        .get("mappings")
        .and_then(Value::as_table)
        .unwrap_or_else(|| panic!("{ROMAJI}: missing [mappings]"));
    assert!(!mappings.is_empty(), "{ROMAJI}: [mappings] is empty");

    for (key, value) in mappings {
        assert!(
            (1..=2).contains(&key.chars().count()),
            "{ROMAJI}: key {key:?} must be one or two units"
        );
        let spellings = value
            .as_array()
            .unwrap_or_else(|| panic!("{ROMAJI}: {key:?} must map to an array"));
        assert!(
            !spellings.is_empty() || key == "っ",
            "{ROMAJI}: {key:?} has no spellings"
        );
        for s in spellings {
            let ok = s
                .as_str()
                .is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-'));
            assert!(ok, "{ROMAJI}: bad spelling {s} for {key:?}");
        }
    }
}
