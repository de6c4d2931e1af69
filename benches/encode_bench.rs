use std::{borrow::Cow, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use phonemy::{
    DoubleMetaphone, Normalizer, RemoveDiacritics, StripPunctuation, UpperCase, stage::Stage,
};

// Short, long, multi-word, accented and origin-flagged names
const SAMPLES: &[&str] = &[
    "Smith",
    "richard",
    "Schwarzenegger",
    "mac caffrey",
    "San Jacinto",
    "Françoise Müller-Lüdenscheidt",
    "Jankelowicz",
    "Ghislane",
    "ALLERTON",
    "o'Brien",
];

fn encode_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for max in [4, 32] {
        let dm = DoubleMetaphone::builder().max_length(max).build().unwrap();
        for &word in SAMPLES {
            group.throughput(Throughput::Bytes(word.len() as u64));
            group.bench_function(BenchmarkId::new(format!("max{max}"), word), |b| {
                b.iter(|| dm.encode(black_box(word)))
            });
        }
    }
    group.finish();
}

fn normalizer_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let normalizer = Normalizer::new();
    for &word in SAMPLES {
        group.bench_function(BenchmarkId::new("word", word), |b| {
            b.iter(|| normalizer.normalize(black_box(word)))
        });
    }
    group.finish();
}

fn stage_bench<S: Stage>(c: &mut Criterion, stage: S) {
    let mut group = c.benchmark_group(stage.name());
    for &word in SAMPLES {
        let mut zero_copy_hits = 0usize;
        let mut total = 0usize;
        group.bench_function(BenchmarkId::new("apply", word), |b| {
            b.iter(|| {
                total += 1;
                let out = if stage.needs_apply(word) {
                    stage.apply(Cow::Borrowed(black_box(word)))
                } else {
                    Cow::Borrowed(word)
                };
                if matches!(out, Cow::Borrowed(s) if s.as_ptr() == word.as_ptr()) {
                    zero_copy_hits += 1;
                }
            })
        });
        let pct = if total > 0 {
            (zero_copy_hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        println!("   ZERO-COPY {zero_copy_hits}/{total} ({pct:.2}%)");
    }
    group.finish();
}

fn stage_matrix(c: &mut Criterion) {
    stage_bench(c, UpperCase);
    stage_bench(c, RemoveDiacritics);
    stage_bench(c, StripPunctuation);
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_secs(1))
        .noise_threshold(0.015)
        .significance_level(0.05);
    targets = encode_benches, normalizer_benches, stage_matrix
);
criterion_main!(benches);
