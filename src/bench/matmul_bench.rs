//! Criterion benchmarks for the multiply engines and the dot product.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use tensimd::{Tensor, dot, full, matmul2d, naive_matmul};

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for &size in &[64usize, 128, 256] {
        let a = full::<f32, 2>([size, size], 2.0);
        let b = full::<f32, 2>([size, size], 3.0);

        group.bench_with_input(BenchmarkId::new("baseline", size), &size, |bench, _| {
            bench.iter(|| naive_matmul(&a, &b).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bench, _| {
            bench.iter(|| matmul2d(&a, &b).unwrap())
        });
    }

    // odd everything: exercises the padding path
    let a = full::<f32, 2>([131, 255], 2.0);
    let b = full::<f32, 2>([255, 333], 2.0);
    group.bench_function("strassen/odd_131x255x333", |bench| {
        bench.iter(|| matmul2d(&a, &b).unwrap())
    });

    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    let len = 1 << 16;

    let a_f32 = Tensor::from_vec([len], (0..len).map(|i| (i % 7) as f32).collect()).unwrap();
    let b_f32 = Tensor::from_vec([len], (0..len).map(|i| (i % 5) as f32).collect()).unwrap();
    group.bench_function("f32", |bench| bench.iter(|| dot(&a_f32, &b_f32).unwrap()));

    let a_u32 = Tensor::from_vec([len], (0..len).map(|i| (i % 7) as u32).collect()).unwrap();
    let b_u32 = Tensor::from_vec([len], (0..len).map(|i| (i % 5) as u32).collect()).unwrap();
    group.bench_function("u32", |bench| bench.iter(|| dot(&a_u32, &b_u32).unwrap()));

    let a_u8 = Tensor::from_vec([len], (0..len).map(|i| (i % 7) as u8).collect()).unwrap();
    let b_u8 = Tensor::from_vec([len], (0..len).map(|i| (i % 5) as u8).collect()).unwrap();
    group.bench_function("u8", |bench| bench.iter(|| dot(&a_u8, &b_u8).unwrap()));

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_dot);
criterion_main!(benches);
