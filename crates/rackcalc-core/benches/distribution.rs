//! Criterion benchmarks for the distribution calculator.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rackcalc_core::coerce::RawInputs;
use rackcalc_core::inputs::RackInputs;

fn bench_compute(c: &mut Criterion) {
    let rack_counts: Vec<i64> = vec![10, 1_000, 100_000];

    let mut group = c.benchmark_group("compute_layout");
    for &racks in &rack_counts {
        let inputs = RackInputs::new(racks * 21 + 7, 2.0, racks, 42.0);
        group.bench_with_input(BenchmarkId::from_parameter(racks), &inputs, |b, inputs| {
            b.iter(|| inputs.layout());
        });
    }
    group.finish();
}

fn bench_coerce(c: &mut Criterion) {
    let raw = RawInputs::new("12345", "1.5U", "48 racks", "42");
    c.bench_function("to_inputs_lenient", |b| b.iter(|| raw.to_inputs_lenient()));
}

criterion_group!(benches, bench_compute, bench_coerce);
criterion_main!(benches);
