use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minesweeper_alpha_core::*;

const SIDE: i64 = Coord::MAX as i64;

fn seed() -> Seed {
    let config = GameConfig::new(SIDE, SIDE, 10_000).unwrap();
    RandomSeedGenerator::new(0x5eed).generate(config)
}

fn sweep(c: &mut Criterion) {
    let seed = seed();

    c.bench_function("reveal every safe cell", |b| {
        b.iter(|| {
            let mut game = Game::new(&seed);
            for row in 0..SIDE {
                for col in 0..SIDE {
                    let pos = (row as Coord, col as Coord);
                    let command = if game.has_mine_at(pos) {
                        Command::Mark { row, col }
                    } else {
                        Command::Reveal { row, col }
                    };
                    black_box(game.apply(command).unwrap());
                }
            }
            assert_eq!(game.state(), GameState::Won);
        })
    });

    c.bench_function("render full board", |b| {
        let mut game = Game::new(&seed);
        b.iter(|| black_box(game.view().to_string()))
    });

    c.bench_function("parse seed file", |b| {
        let text = seed.to_string();
        b.iter(|| black_box(Seed::parse(&text).unwrap()))
    });
}

criterion_group!(benches, sweep);
criterion_main!(benches);
