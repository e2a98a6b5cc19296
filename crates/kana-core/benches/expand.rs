use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kana_core::corpus::Corpus;
use kana_core::matcher::Matcher;
use kana_core::romaji::{candidates_for, expand};

const READINGS: &[&str] = &[
    "がっこう",
    "しんぶん",
    "ぎゅうにゅう",
    "じてんしゃ",
    "ぱーてぃー",
    "こんにちは",
    "しゅっちょうじょ",
];

fn bench_expand(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand");
    for reading in READINGS {
        group.bench_with_input(BenchmarkId::from_parameter(reading), reading, |b, r| {
            b.iter(|| expand(r))
        });
    }
    group.finish();
}

fn bench_corpus_rounds(c: &mut Criterion) {
    let corpus = Corpus::builtin();
    c.bench_function("type_builtin_corpus", |b| {
        b.iter(|| {
            for word in corpus.words() {
                let candidates = candidates_for(&word.reading).unwrap();
                let target = candidates.first().unwrap().to_string();
                let mut matcher = Matcher::new(candidates);
                for key in target.chars() {
                    matcher.press(key);
                }
                assert!(matcher.is_complete());
            }
        })
    });
}

criterion_group!(benches, bench_expand, bench_corpus_rounds);
criterion_main!(benches);
