use criterion::{criterion_group, criterion_main, Criterion};
use amazing::{
    maze::Maze,
    renderers,
    units::{ColumnsCount, RowsCount},
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

fn bench_render_lines_64(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(64);
    let maze = Maze::new(RowsCount(64), ColumnsCount(64), &mut rng).unwrap();

    c.bench_function("render_lines_64", move |b| {
        b.iter(|| renderers::render_lines(maze.grid()))
    });
}

fn bench_render_text_64(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(64);
    let maze = Maze::new(RowsCount(64), ColumnsCount(64), &mut rng).unwrap();

    c.bench_function("render_text_64", move |b| {
        b.iter(|| renderers::render_text(maze.grid()))
    });
}

criterion_group!(benches, bench_render_lines_64, bench_render_text_64);
criterion_main!(benches);
