//! Benchmark runner comparing the multiply engines.

use std::time::Instant;

use tensimd::{Tensor, dot, full, matmul2d, naive_matmul};

fn main() {
    println!("=== Tensor Multiply Benchmark ===\n");
    println!("Vector path: {}\n", simd_path());

    let cases = [
        (128, 128, 128),
        (256, 256, 256),
        (512, 512, 512),
        (131, 255, 666),
    ];
    let iterations = 3;

    println!(
        "{:<20} {:>12} {:>12} {:>9}",
        "Case", "Baseline", "Strassen", "Speedup"
    );
    println!("{}", "-".repeat(56));

    for &(m, n, k) in &cases {
        let a = full::<f32, 2>([m, n], 2.0);
        let b = full::<f32, 2>([n, k], 3.0);

        let baseline_ms = bench(iterations, || {
            naive_matmul(&a, &b).unwrap();
        });
        let strassen_ms = bench(iterations, || {
            matmul2d(&a, &b).unwrap();
        });

        println!(
            "{:<20} {:>10.2}ms {:>10.2}ms {:>8.2}x",
            format!("{}x{} * {}x{}", m, n, n, k),
            baseline_ms,
            strassen_ms,
            baseline_ms / strassen_ms
        );
    }

    println!();

    // Dot product throughput on a long vector
    let len = 1 << 20;
    let a = Tensor::from_vec([len], (0..len).map(|i| (i % 7) as f32).collect()).unwrap();
    let b = Tensor::from_vec([len], (0..len).map(|i| (i % 5) as f32).collect()).unwrap();

    let dot_ms = bench(iterations, || {
        dot(&a, &b).unwrap();
    });
    println!(
        "dot, {} elements: {:.3} ms ({:.2} GFLOPS)",
        len,
        dot_ms,
        2.0 * len as f64 / (dot_ms / 1000.0) / 1e9
    );
}

/// Average wall time in milliseconds over `iterations` runs (plus a warmup).
fn bench(iterations: usize, mut f: impl FnMut()) -> f64 {
    f();

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn simd_path() -> &'static str {
    if cfg!(target_arch = "aarch64") {
        "NEON"
    } else if cfg!(target_arch = "x86_64") {
        "SSE2"
    } else {
        "scalar"
    }
}
