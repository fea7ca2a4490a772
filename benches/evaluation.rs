use criterion::{black_box, criterion_group, criterion_main, Criterion};
use equation_parser::{evaluate_batch, parse_and_evaluate, tokenize, Evaluator, Registry};
use evalexpr::*;

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("binding_power_arithmetic", |b| {
        b.iter(|| parse_and_evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0) * black_box(4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5 ^ 2 ^ 0.5";

    group.bench_function("binding_power_arithmetic", |b| {
        b.iter(|| parse_and_evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("tokenize_only", |b| {
        b.iter(|| tokenize(black_box(expr)).unwrap())
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark constants and single-argument functions
fn benchmark_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("Function Call Evaluation");

    let expr = "sin(pi) + 2 * sqrt(16) - exp(1)";
    let mut registry = Registry::standard();
    registry.register_function("square", |x| x * x);
    let evaluator = Evaluator::new(&registry);

    group.bench_function("standard_registry", |b| {
        b.iter(|| parse_and_evaluate(black_box(expr)).unwrap())
    });

    group.bench_function("custom_registry", |b| {
        b.iter(|| evaluator.evaluate(black_box("square(4) * pi")).unwrap())
    });

    group.bench_function("meval_functions", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });
}

/// Benchmark sequential versus parallel evaluation of many inputs
fn benchmark_batch_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let inputs: Vec<String> = (0..1_000)
        .map(|i| format!("({} + 1) * 2 ^ 3 / sqrt(4)", i))
        .collect();

    group.bench_function("sequential", |b| {
        b.iter(|| {
            inputs
                .iter()
                .map(|input| parse_and_evaluate(black_box(input)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("parallel", |b| {
        b.iter(|| evaluate_batch(black_box(&inputs), Registry::shared()))
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_function_calls,
    benchmark_batch_evaluation
);
criterion_main!(benches);
