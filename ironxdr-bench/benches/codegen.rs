//! Front-end and generator benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ironxdr_bench::schema::synthetic_schema;
use ironxdr_codegen::Generator;
use ironxdr_schema::SymbolTable;
use ironxdr_schema::lexer::Lexer;
use std::hint::black_box;

fn benchmark_tokenize(c: &mut Criterion) {
    let source = synthetic_schema(64);
    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("64_groups", |b| {
        b.iter(|| Lexer::new(black_box(&source)).tokenize())
    });
    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for groups in [8usize, 64, 256] {
        let source = synthetic_schema(groups);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(groups), &source, |b, src| {
            b.iter(|| {
                let mut table = SymbolTable::new();
                let _ = table.parse_str(black_box(src));
                table
            })
        });
    }
    group.finish();
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for groups in [8usize, 64, 256] {
        let mut table = SymbolTable::new();
        let _ = table.parse_str(&synthetic_schema(groups));
        group.bench_with_input(BenchmarkId::from_parameter(groups), &table, |b, table| {
            b.iter(|| Generator::new(black_box(table)).generate())
        });
    }
    group.finish();
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let source = synthetic_schema(64);
    c.bench_function("generate_from_str_64", |b| {
        b.iter(|| ironxdr_codegen::generate_from_str(black_box(&source)))
    });
}

criterion_group!(
    benches,
    benchmark_tokenize,
    benchmark_parse,
    benchmark_generate,
    benchmark_end_to_end
);
criterion_main!(benches);
