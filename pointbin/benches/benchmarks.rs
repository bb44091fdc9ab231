use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pointbin::PointBin3D;
use rand::prelude::*;

fn random_points(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let mut points = Vec::with_capacity(n * 3);
    for _ in 0..n * 3 {
        points.push(rng.gen_range(0.0..100.0));
    }
    points
}

fn construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    let mut rng = StdRng::seed_from_u64(1);

    for size in [100, 1_000, 10_000].iter() {
        let points = random_points(&mut rng, *size);
        let bin_widths = [5.0, 5.0, 5.0];

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| PointBin3D::new(black_box(&points), black_box(&bin_widths)).unwrap());
        });
    }

    group.finish();
}

fn radius_search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_search");
    let mut rng = StdRng::seed_from_u64(2);

    for size in [100, 1_000, 10_000].iter() {
        let points = random_points(&mut rng, *size);
        let mut bin = PointBin3D::new(&points, &[5.0, 5.0, 5.0]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                bin.reset();
                bin.radius_search(black_box(50.0), 50.0, 50.0, black_box(5.0))
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn consume_all_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let points = random_points(&mut rng, 1_000);
    let mut bin = PointBin3D::new(&points, &[5.0, 5.0, 5.0]).unwrap();

    let queries: Vec<[f64; 3]> = (0..100)
        .map(|_| {
            [
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..100.0),
                rng.gen_range(0.0..100.0),
            ]
        })
        .collect();

    // Greedy correspondence-matching pattern: many searches against one
    // structure, then a reset.
    c.bench_function("consume_all", |b| {
        b.iter(|| {
            bin.reset();
            for q in queries.iter() {
                bin.radius_search(black_box(q[0]), q[1], q[2], 10.0).unwrap();
            }
            black_box(bin.found_count())
        })
    });
}

criterion_group!(
    benches,
    construction_benchmark,
    radius_search_benchmark,
    consume_all_benchmark
);
criterion_main!(benches);
