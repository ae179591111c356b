use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gauge::{evaluate, scan, Ctx};

const LINE: &str = "(A:AIRSPEED INDICATED, knots) 40 60 rng 1 0 ? (>L:flaps_ok) \
                    2 pi * 0.5 * sin sqr 3 4 atg2 + 10 lg * p";

pub fn evaluate_benchmark(c: &mut Criterion) {
    let mut ctx = Ctx::empty();
    evaluate("50 (>A:AIRSPEED INDICATED)", &mut ctx);
    c.bench_function("evaluate gauge line", |b| {
        b.iter(|| evaluate(black_box(LINE), &mut ctx))
    });
}

pub fn scan_benchmark(c: &mut Criterion) {
    c.bench_function("scan gauge line", |b| b.iter(|| scan(black_box(LINE))));
}

criterion_group!(benches, evaluate_benchmark, scan_benchmark);
criterion_main!(benches);
