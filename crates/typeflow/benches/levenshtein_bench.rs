//! Benchmarks for distance computation and fuzzy search

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typeflow::filter::lowercase;
use typeflow::{levenshtein, EditDistanceState, EngineConfig, FuzzyEngine, Pruning, Strategy};

const PAIRS: &[(&str, &str)] = &[
    ("alessandro", "lessandro"),
    ("alessandro", "alesasndro"),
    ("zzz", "az"),
    ("--|", "---"),
];

const COUNTRIES: &str = include_str!("../testdata/countries.txt");

/// Exponential reference implementation, kept only for comparison
fn recursive(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }
    let (la, lb) = (a.len(), b.len());
    let cost = usize::from(a[la - 1] != b[lb - 1]);
    (recursive(&a[..la - 1], b) + 1)
        .min(recursive(a, &b[..lb - 1]) + 1)
        .min(recursive(&a[..la - 1], &b[..lb - 1]) + cost)
}

fn bench_distance(c: &mut Criterion) {
    let decoded: Vec<(Vec<char>, Vec<char>)> = PAIRS
        .iter()
        .map(|(a, b)| (a.chars().collect(), b.chars().collect()))
        .collect();

    let mut group = c.benchmark_group("distance");

    group.bench_function("recursive", |b| {
        b.iter(|| {
            for (source, target) in &decoded {
                black_box(recursive(black_box(source), black_box(target)));
            }
        })
    });

    group.bench_function("two_row_one_shot", |b| {
        b.iter(|| {
            for (source, target) in PAIRS {
                black_box(levenshtein(black_box(source), black_box(target)));
            }
        })
    });

    for strategy in [Strategy::FullMatrix, Strategy::TwoRow] {
        group.bench_function(format!("state_{strategy:?}"), |b| {
            b.iter(|| {
                for (source, target) in PAIRS {
                    let mut state = EditDistanceState::with_strategy(target, strategy);
                    state.extend(black_box(source));
                    black_box(state.distance());
                }
            })
        });
    }

    group.finish();
}

fn bench_incremental(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental");

    for strategy in [Strategy::FullMatrix, Strategy::TwoRow] {
        group.bench_function(format!("char_by_char_{strategy:?}"), |b| {
            b.iter(|| {
                let mut state = EditDistanceState::with_strategy("rep of ireland", strategy);
                for ch in "ireland (republic)".chars() {
                    state.extend_chars(&[ch]);
                }
                state.rollback_by(11).ok();
                black_box(state.distance())
            })
        });
    }

    group.finish();
}

fn bench_find_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_match");

    for pruning in [Pruning::Bounded, Pruning::TerminalThreshold, Pruning::Disabled] {
        let mut engine = FuzzyEngine::with_config(EngineConfig::default().with_pruning(pruning));
        engine.set_source(COUNTRIES.lines(), &[&lowercase]);

        group.bench_function(format!("countries_{pruning:?}"), |b| {
            b.iter(|| black_box(engine.find_match(black_box("rep of ireland"), 0.32)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distance, bench_incremental, bench_find_match);
criterion_main!(benches);
