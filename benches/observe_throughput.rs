use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use liora_sentinel::{cosine_distance, NullSink, Sentinel, SentinelPolicy, TrailRetention};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use std::sync::Arc;

fn random_vectors(count: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..count)
        .map(|_| (0..dim).map(|_| rng.random_range(-1.0..1.0)).collect())
        .collect()
}

fn benchmark_observe(c: &mut Criterion) {
    let mut group = c.benchmark_group("observe_throughput");

    for dim in [4usize, 384, 1536] {
        let vectors = random_vectors(256, dim);
        let origin = vec![1.0; dim];

        // Capped trail keeps memory flat across iterations
        let policy =
            SentinelPolicy::default().retention(TrailRetention::Capped { max_events: 1024 });
        let mut sentinel = Sentinel::with_sink(&origin, policy, Arc::new(NullSink))
            .expect("origin is non-degenerate");

        group.throughput(Throughput::Elements(vectors.len() as u64));
        group.bench_with_input(BenchmarkId::new("observe", dim), &vectors, |b, vectors| {
            b.iter(|| {
                for v in vectors {
                    let result = sentinel.observe(black_box(v), None);
                    black_box(result).unwrap();
                }
            });
        });
    }

    group.finish();
}

fn benchmark_cosine_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("cosine_distance");

    for dim in [384usize, 1536] {
        let vectors = random_vectors(2, dim);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &vectors, |b, v| {
            b.iter(|| black_box(cosine_distance(black_box(&v[0]), black_box(&v[1]))).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_observe, benchmark_cosine_distance);
criterion_main!(benches);
