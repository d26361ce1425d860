use criterion::{criterion_group, criterion_main, Criterion};
use mazes::{generators, graph, pathing};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::generate(32, 32, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(256);
    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| generators::generate(256, 256, &mut rng))
    });
}

fn bench_longest_path_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    let maze = generators::generate(32, 32, &mut rng).unwrap();
    c.bench_function("longest_path_32", move |b| b.iter(|| pathing::longest_path(&maze)));
}

fn bench_is_perfect_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    let maze = generators::generate(32, 32, &mut rng).unwrap();
    c.bench_function("is_perfect_32", move |b| b.iter(|| graph::is_perfect(&maze)));
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256,
    bench_longest_path_32,
    bench_is_perfect_32
);
criterion_main!(benches);
