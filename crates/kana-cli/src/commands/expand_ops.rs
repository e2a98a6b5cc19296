use kana_engine::matcher::Matcher;
use kana_engine::romaji::{self, CandidateSet};

fn candidates(reading: &str, raw: bool) -> CandidateSet {
    if raw {
        romaji::expand(reading)
    } else {
        die!(romaji::candidates_for(reading), "Error: {}")
    }
}

/// Print every spelling of `reading`, one per line, in expansion order.
pub fn expand(reading: &str, raw: bool, json: bool) {
    let set = candidates(reading, raw);
    if json {
        let out = die!(serde_json::to_string_pretty(set.as_slice()), "Error: {}");
        println!("{out}");
        return;
    }
    for spelling in &set {
        println!("{spelling}");
    }
    eprintln!("{} candidates", set.len());
}

/// Feed `typed` through a matcher for `reading` and show what the
/// player would see.
pub fn project(reading: &str, typed: &str) {
    let mut matcher = Matcher::new(candidates(reading, false));
    for (i, key) in typed.chars().enumerate() {
        if !matcher.press(key).accepted {
            println!("rejected {key:?} at offset {i} (typed so far: {:?})", matcher.typed());
        }
    }
    let p = matcher.projection();
    println!("typed:     {}", matcher.typed());
    println!("done:      {}", p.done);
    println!("next:      {}", p.next);
    println!("remaining: {}", p.remaining);
    println!("state:     {:?}", matcher.state());
}
