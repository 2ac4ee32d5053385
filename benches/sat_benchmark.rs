// benches/sat_benchmark.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sat_collision::generator::PolygonGenerator;
use sat_collision::geometry::{ConvexPolygon, Point2};
use sat_collision::sat::SatCollision;
use sat_collision::demo_scene::create_demo_world;
use sat_collision::config::SimulationConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_test_pair(rng: &mut impl Rng) -> (ConvexPolygon, ConvexPolygon) {
    let poly1 = PolygonGenerator::generate_random(rng, Point2::ZERO, 60.0..100.0, 3..=8).unwrap();
    let offset = rng.gen_range(0.0..250.0);
    let poly2 = PolygonGenerator::generate_random(rng, Point2::new(offset, 0.0), 60.0..100.0, 3..=8).unwrap();
    (poly1, poly2)
}

fn sat_benchmark_fn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    const NUM_BENCH_PAIRS: usize = 100;
    let pairs: Vec<(ConvexPolygon, ConvexPolygon)> =
        (0..NUM_BENCH_PAIRS).map(|_| create_test_pair(&mut rng)).collect();

    let mut group = c.benchmark_group("SatOperations");

    group.bench_function("overlaps_100_pairs", |b| {
        let mut pair_iter = pairs.iter().cycle();
        b.iter(|| {
            let (poly1, poly2) = pair_iter.next().unwrap();
            SatCollision::overlaps(black_box(poly1), black_box(poly2))
        })
    });

    group.bench_function("demo_world_tick", |b| {
        let mut world = create_demo_world(&SimulationConfig::default()).unwrap();
        b.iter(|| black_box(world.tick()))
    });
    group.finish();
}

criterion_group!(benches, sat_benchmark_fn);
criterion_main!(benches);
