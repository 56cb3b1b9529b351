//! Benchmarks for sparse matrix arithmetic and the text codec

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use sparse_matrix::{codec, SparseMatrix};
use std::hint::black_box;

/// Generate a square sparse matrix with `per_row` entries in each row
fn generate_sparse_matrix(n: usize, per_row: usize) -> SparseMatrix {
    let mut matrix = SparseMatrix::new(n, n);
    for i in 0..n {
        for j in 0..per_row.min(n) {
            let col = (j * 3 + i * 7) % n;
            let value = 1 + ((i * j) % 9) as i64;
            matrix.set(i, col, value).unwrap();
        }
    }
    matrix
}

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise");

    for &n in &[100, 1_000, 10_000] {
        let a = generate_sparse_matrix(n, 8);
        let b = generate_sparse_matrix(n, 5);

        group.bench_with_input(BenchmarkId::new("add", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.add(b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("subtract", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.subtract(b).unwrap()))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(20);

    for &n in &[100, 1_000, 10_000] {
        let a = generate_sparse_matrix(n, 8);
        let b = generate_sparse_matrix(n, 8);

        group.bench_with_input(BenchmarkId::from_parameter(n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.multiply(b).unwrap()))
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let matrix = generate_sparse_matrix(10_000, 8);
    let text = codec::encode(&matrix);

    c.bench_function("encode_10000", |bench| {
        bench.iter(|| black_box(codec::encode(&matrix)))
    });
    c.bench_function("decode_10000", |bench| {
        bench.iter(|| black_box(codec::decode::<i64>(&text).unwrap()))
    });
}

criterion_group!(benches, bench_elementwise, bench_multiply, bench_codec);
criterion_main!(benches);
