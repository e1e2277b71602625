use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tygen::lexer::Lexer;

static INPUT: &str = include_str!("../../demos/big.tg");

fn lex(input: &[u8]) {
    let mut lexer = Lexer::new(input);
    let mut i = 0;
    loop {
        let token = lexer.next_token();
        if token.is_eof() || token.is_error() {
            break;
        }
        i += 1;
    }
    black_box(i);
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("lexer", |b| b.iter(|| lex(black_box(INPUT.as_bytes()))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
