//! Benchmarks for normalising shorthand declarations
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oxov_normaliser::OrderedValues;

pub fn criterion_benchmark(c: &mut Criterion) {
    let declarations = [
        ("animation", "fade 2s ease-in 1s infinite alternate both paused"),
        (
            "animation",
            "steps(4, jump-end) 150ms slide-in, 2s reverse linear spin",
        ),
        (
            "transition",
            "color 1s ease-in-out 50ms, cubic-bezier(0.4, 0, 0.2, 1) 2s background-color",
        ),
    ];
    let job = OrderedValues::default();
    for (property, value) in declarations {
        c.bench_with_input(BenchmarkId::new(property, value), &value, |b, value| {
            b.iter(|| black_box(job.declaration(property, value)));
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
