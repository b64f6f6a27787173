// Criterion benchmarks for sequence evaluation.
//
// Run:
//   cargo bench -p wfsa-engine

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use wfsa_engine::samples;

/// Score a batch of letter sequences with the probability bigram model,
/// backward and forward.
fn bench_bigram_scoring(c: &mut Criterion) {
    let a = samples::bigram_scorer();
    let words: Vec<Vec<char>> = ["eta", "ena", "tassa", "seitsestaan", "intiaani"]
        .iter()
        .map(|w| w.chars().collect())
        .collect();

    c.bench_function("bigram_accept_backward", |b| {
        b.iter(|| {
            for w in &words {
                black_box(a.accept(black_box(w)));
            }
        })
    });

    c.bench_function("bigram_accept_forward", |b| {
        b.iter(|| {
            for w in &words {
                black_box(a.accept_forward(black_box(w)));
            }
        })
    });
}

/// Recognize a long alternating consonant/vowel string; the boolean
/// algebra exercises the pruning path most often.
fn bench_boolean_long_input(c: &mut Criterion) {
    let a = samples::double_letter_acceptor();
    let mut input: Vec<char> = "CV".chars().cycle().take(10_000).collect();
    input.push('V');

    c.bench_function("double_letter_10k", |b| {
        b.iter(|| black_box(a.accept(black_box(&input))))
    });
}

criterion_group!(benches, bench_bigram_scoring, bench_boolean_long_input);
criterion_main!(benches);
