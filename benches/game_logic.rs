use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{transform, Board, GameState, SimpleRng};
use tui_2048::types::Direction;

fn sample_board() -> Board {
    Board::from_rows([
        [2, 2, 4, 8],
        [0, 4, 4, 16],
        [2, 0, 2, 0],
        [32, 32, 64, 64],
    ])
}

fn bench_transform(c: &mut Criterion) {
    c.bench_function("transform_line", |b| {
        b.iter(|| transform(black_box([2u32, 2, 4, 4]), black_box(true)))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = sample_board();
    c.bench_function("apply_move_all_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(board.apply_move(black_box(dir)));
            }
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    c.bench_function("is_game_over_full_board", |b| {
        b.iter(|| black_box(&board).is_game_over())
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut board = sample_board();
            board.spawn_tile(&mut rng)
        })
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("cycle_moves_until_over", |b| {
        b.iter(|| {
            let mut game: GameState = GameState::new(black_box(7));
            let mut i = 0u8;
            while !game.game_over() && i < 255 {
                game.apply_move(Direction::from_index(i % 4));
                i += 1;
            }
            game.score()
        })
    });
}

criterion_group!(
    benches,
    bench_transform,
    bench_apply_move,
    bench_game_over_check,
    bench_spawn,
    bench_full_game
);
criterion_main!(benches);
