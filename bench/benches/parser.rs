use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tygen::parser;

static INPUT: &str = include_str!("../../demos/big.tg");

fn parse(input: &[u8]) {
    let types = parser::parse_file("big.tg", input);
    black_box(types.map(|types| types.len()).unwrap_or(0));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parser", |b| b.iter(|| parse(black_box(INPUT.as_bytes()))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
