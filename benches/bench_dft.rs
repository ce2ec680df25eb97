use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use kodft::dft::{forward, inverse};
use kodft::projection::{project, reconstruct};
use kodft::Basis;

fn signal(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.37).sin()).collect()
}

fn bench_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft");
    for &n in &[16usize, 64, 256, 1024] {
        let x = signal(n);
        let coeffs = forward(&x);
        group.bench_with_input(BenchmarkId::new("forward", n), &x, |b, x| {
            b.iter(|| forward(black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &coeffs, |b, c| {
            b.iter(|| inverse(black_box(c)))
        });
    }
    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");
    for &n in &[8usize, 32, 64] {
        let x = signal(n);
        for basis in Basis::ALL {
            let amps = project(&x, basis);
            group.bench_with_input(
                BenchmarkId::new(format!("project/{basis}"), n),
                &x,
                |b, x| b.iter(|| project(black_box(x), basis)),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("reconstruct/{basis}"), n),
                &amps,
                |b, a| b.iter(|| reconstruct(black_box(a), basis)),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_dft, bench_projection);
criterion_main!(benches);
