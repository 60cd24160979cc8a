//! Benchmarks for sparse matrix multiplication and addition
//!
//! Compares the cross list and the triple list against each other and
//! against sprs on banded matrices, where the row and column chains stay
//! short and the merge-based kernels should scale linearly.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linked_sparse::{
    to_sprs_csr, CrossListMatrix, MatrixConfig, SparseMatrix, TripleListMatrix,
};
use std::hint::black_box;
use std::time::Duration;

/// Create an `n × n` banded matrix with `2 * half_width + 1` diagonals
fn banded<M: SparseMatrix<f64>>(n: usize, half_width: usize, config: MatrixConfig) -> M {
    let mut matrix = M::with_config(n, n, config).unwrap();
    matrix.reserve(n * (2 * half_width + 1)).unwrap();
    for i in 0..n {
        for j in i.saturating_sub(half_width)..(i + half_width + 1).min(n) {
            matrix.insert_last(1.0 + (i * 7 + j * 3) as f64 % 5.0, i, j).unwrap();
        }
    }
    matrix
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(20);
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));

    for size in [100, 500, 2000] {
        let cross: CrossListMatrix<f64> = banded(size, 3, MatrixConfig::default());
        let triple: TripleListMatrix<f64> = banded(size, 3, MatrixConfig::default());
        let csr = to_sprs_csr(&cross).unwrap();

        group.throughput(Throughput::Elements(cross.nnz() as u64));

        group.bench_function(BenchmarkId::new("cross", size), |bencher| {
            bencher.iter(|| black_box(&cross).mul(black_box(&cross)).unwrap());
        });

        group.bench_function(BenchmarkId::new("triple", size), |bencher| {
            bencher.iter(|| black_box(&triple).mul(black_box(&triple)).unwrap());
        });

        group.bench_function(BenchmarkId::new("sprs", size), |bencher| {
            bencher.iter(|| black_box(&csr) * black_box(&csr));
        });
    }
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.sample_size(20);

    for size in [100, 500, 2000] {
        let cross: CrossListMatrix<f64> = banded(size, 3, MatrixConfig::default());
        let triple: TripleListMatrix<f64> = banded(size, 3, MatrixConfig::default());

        group.throughput(Throughput::Elements(cross.nnz() as u64));

        group.bench_function(BenchmarkId::new("cross", size), |bencher| {
            bencher.iter(|| black_box(&cross).add(black_box(&cross)).unwrap());
        });

        group.bench_function(BenchmarkId::new("triple", size), |bencher| {
            bencher.iter(|| black_box(&triple).add(black_box(&triple)).unwrap());
        });
    }
    group.finish();
}

/// Row-parallel versus sequential arithmetic on the same input
fn bench_parallel_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_rows");
    group.sample_size(20);

    let size = 2000;
    let parallel: CrossListMatrix<f64> = banded(size, 5, MatrixConfig::default());
    let sequential: CrossListMatrix<f64> = banded(size, 5, MatrixConfig::sequential());

    group.bench_function("parallel", |bencher| {
        bencher.iter(|| black_box(&parallel).mul(black_box(&parallel)).unwrap());
    });

    group.bench_function("sequential", |bencher| {
        bencher.iter(|| black_box(&sequential).mul(black_box(&sequential)).unwrap());
    });

    group.finish();
}

/// Transpose cost of each representation
fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    let cross: CrossListMatrix<f64> = banded(2000, 3, MatrixConfig::default());
    let triple: TripleListMatrix<f64> = banded(2000, 3, MatrixConfig::default());

    group.bench_function("cross", |bencher| {
        bencher.iter(|| black_box(&cross).transpose().unwrap());
    });

    group.bench_function("triple", |bencher| {
        bencher.iter(|| black_box(&triple).transpose().unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_multiply,
    bench_add,
    bench_parallel_rows,
    bench_transpose
);
criterion_main!(benches);
