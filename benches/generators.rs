use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use amazing::{
    entrances::place_entrances,
    generators,
    grid::Grid,
    maze::Maze,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_recursive_backtracker_32(c: &mut Criterion) {
    let fresh = Grid::new(RowsCount(32), ColumnsCount(32)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(32);

    c.bench_function("recursive_backtracker_32", move |b| {
        b.iter_batched(|| fresh.clone(),
                       |mut g| {
                           let entrances = place_entrances(&mut g, &mut rng);
                           generators::recursive_backtracker(&mut g, entrances.start, &mut rng)
                       },
                       BatchSize::SmallInput)
    });
}

fn bench_recursive_backtracker_256(c: &mut Criterion) {
    let fresh = Grid::new(RowsCount(256), ColumnsCount(256)).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(256);

    c.bench_function("recursive_backtracker_256", move |b| {
        b.iter_batched(|| fresh.clone(),
                       |mut g| {
                           let entrances = place_entrances(&mut g, &mut rng);
                           generators::recursive_backtracker(&mut g, entrances.start, &mut rng)
                       },
                       BatchSize::LargeInput)
    });
}

fn bench_new_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(1);
    c.bench_function("new_maze_32", move |b| {
        b.iter(|| Maze::new(RowsCount(32), ColumnsCount(32), &mut rng).unwrap())
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_32,
    bench_recursive_backtracker_256,
    bench_new_maze_32
);
criterion_main!(benches);
