use criterion::{criterion_group, criterion_main, Criterion};
use promptline::path::PathPrettifier;
use std::hint::black_box;

const DEEP_PATH: &str = "/home/alice/src/github.com/example-organization/some-very-long-repository-name/crates/internal-component/src/submodule";

fn bench_prettify(c: &mut Criterion) {
    let prettifier = PathPrettifier::new().with_home(Some("/home/alice"));

    c.bench_function("prettify_within_budget", |b| {
        b.iter(|| prettifier.prettify(black_box(DEEP_PATH), black_box(200)))
    });

    c.bench_function("prettify_segment_truncation", |b| {
        b.iter(|| prettifier.prettify(black_box(DEEP_PATH), black_box(60)))
    });

    c.bench_function("prettify_whole_path_fallback", |b| {
        b.iter(|| prettifier.prettify(black_box(DEEP_PATH), black_box(12)))
    });
}

criterion_group!(benches, bench_prettify);
criterion_main!(benches);
