//! Runtime trait benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use ironxdr_core::prelude::*;
use std::hint::black_box;

fn benchmark_num32(c: &mut Criterion) {
    let mut value: i32 = -7;

    c.bench_function("i32_get_u32", |b| b.iter(|| black_box(&value).get_u32()));

    c.bench_function("i32_set_u32", |b| {
        b.iter(|| value.set_u32(black_box(0xFFFF_FFF0)))
    });

    let mut flag = false;
    c.bench_function("bool_set_u32", |b| b.iter(|| flag.set_u32(black_box(1))));
}

fn benchmark_bounded_bytes(c: &mut Criterion) {
    let payload = vec![0xA5u8; 256];
    let mut dst: Vec<u8> = Vec::with_capacity(512);

    c.bench_function("set_bounded_bytes_256", |b| {
        b.iter(|| set_bounded_bytes(&mut dst, black_box(&payload), 512))
    });

    let text = "x".repeat(256);
    let mut s = String::with_capacity(512);
    c.bench_function("set_bounded_string_256", |b| {
        b.iter(|| set_bounded_bytes(&mut s, black_box(text.as_bytes()), 512))
    });
}

criterion_group!(benches, benchmark_num32, benchmark_bounded_bytes);
criterion_main!(benches);
