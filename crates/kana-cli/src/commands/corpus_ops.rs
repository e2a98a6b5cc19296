use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use kana_engine::corpus::Corpus;
use kana_engine::romaji::candidates_for;

/// Load a corpus file, or the configured/builtin one when `file` is `None`.
pub fn load(file: Option<&str>) -> Corpus {
    match file {
        Some(path) => die!(Corpus::open(Path::new(path)), "Error loading {path}: {}"),
        None => die!(Corpus::configured(), "Error loading corpus: {}"),
    }
}

pub fn corpus_validate(file: &str) {
    let corpus = load(Some(file));
    let spellings: usize = corpus
        .words()
        .iter()
        .filter_map(|w| candidates_for(&w.reading).ok())
        .map(|c| c.len())
        .sum();
    println!("OK: {} words, {} spellings", corpus.len(), spellings);
}

/// Draw `n` words the way a session would and print them with their
/// reference spelling.
pub fn corpus_sample(file: Option<&str>, n: usize, seed: Option<u64>) {
    let corpus = load(file);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    for _ in 0..n {
        let word = corpus.choose(&mut rng);
        let spelling = die!(candidates_for(&word.reading), "Error: {}");
        println!(
            "{}\t{}\t{}",
            word.display,
            word.reading,
            spelling.first().unwrap_or_default()
        );
    }
}
