use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lloyd::{clusterize, KMeansConfig, Point};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// `groups` blobs of `per_group` points each, spread along the diagonal.
fn blobs(groups: usize, per_group: usize, dim: usize) -> Vec<Point> {
    let mut rng = ChaCha20Rng::seed_from_u64(17);
    (0..groups)
        .flat_map(|g| {
            let center = (g as f64) * 1000.0;
            (0..per_group)
                .map(|_| (0..dim).map(|_| center + rng.gen_range(-50.0..50.0)).collect())
                .collect::<Vec<Point>>()
        })
        .collect()
}

fn bench_clusterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("clusterize");
    for &n in &[100usize, 1_000, 10_000] {
        let data = blobs(4, n / 4, 3);
        let config = KMeansConfig::new(4).with_seed(1).with_limit(100);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| clusterize(black_box(data), black_box(&config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_clusterize);
criterion_main!(benches);
