use criterion::{black_box, criterion_group, criterion_main, Criterion};

use puzzle_searcher::{misplaced_tiles, zero_estimate, Board, Searcher, State};

// Four moves from the goal.
const START: &str = "312475680";

fn run(mut searcher: Searcher) -> u32 {
    let board = Board::from_digits(black_box(START)).unwrap();
    let result = searcher.find_solution(State::root(board));
    result.solution().map_or(0, |s| s.num_moves)
}

fn criterion_bench(c: &mut Criterion) {
    c.bench_function("breadth-first", |b| {
        b.iter(|| run(Searcher::breadth_first(None)))
    });

    c.bench_function("greedy-misplaced", |b| {
        b.iter(|| run(Searcher::greedy(misplaced_tiles)))
    });

    c.bench_function("a-star-misplaced", |b| {
        b.iter(|| run(Searcher::a_star(misplaced_tiles)))
    });

    c.bench_function("a-star-zero", |b| {
        b.iter(|| run(Searcher::a_star(zero_estimate)))
    });
}

criterion_group!(benches, criterion_bench);
criterion_main!(benches);
