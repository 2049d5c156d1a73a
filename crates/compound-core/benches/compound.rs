//! Criterion benchmarks for the compound interest evaluator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use compound_core::calculator::{evaluate, evaluate_or_zero, InvestmentParams};
use compound_core::observers::NoOpObserver;
use compound_core::operand::Operand;

fn bench_evaluate(c: &mut Criterion) {
    let frequencies: Vec<u32> = vec![1, 4, 12, 365];

    let mut group = c.benchmark_group("evaluate");
    for &n in &frequencies {
        let params = InvestmentParams {
            compounds_per_year: f64::from(n),
            ..InvestmentParams::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(n), &params, |b, params| {
            b.iter(|| evaluate(black_box(params)));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("evaluate_or_zero");
    let observer = NoOpObserver::new();
    let inputs = [
        ("numeric", ["1000.0", "0.05", "10.0", "4"]),
        ("zero_frequency", ["1000.0", "0.05", "10.0", "0"]),
        ("text_rate", ["1000.0", "five", "10.0", "4"]),
    ];
    for (label, raw) in &inputs {
        let [p, r, t, n] = raw.map(Operand::parse);
        group.bench_function(*label, |b| {
            b.iter(|| evaluate_or_zero(black_box(&p), &r, &t, &n, &observer));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
