//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! Runs many iterations of the legality filter over every piece of the
//! side to move, on positions of varying density.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p tamerlane_core

use std::time::Instant;

use tamerlane_core::{Board, Color, Game, movegen};

const SPARSE: &str = "
| | | | | | | | | | |k|
| | | | | | | | | | | |
| | | | | | | |P| | | |
| | | | | | | | | | | |
| | | |r| | | | | | | |
| | |C| | | | | | | | |
| | | | | | | | | | | |
| | | | |E| | | | | | |
| |L| | | | | | | | | |
|K| | | | | | | | | | |
";

const TANGLED: &str = "
| | | | | | | |P| | | |
| | | | | | | | | | | |
|R| | | | | | | | | | |
| | | |k| | | |p| | | |
| | | | |O| | | | | | |
| | |R|l| | | | | | | |
| | | | | | | | | | | |
| | | | | | | |r| | | |
| | | |K| |o| | | | | |
| |c| | | | | | | | | |
";

const ITERATIONS: usize = 10_000;

fn main() {
    let positions: Vec<(&str, Game)> = vec![
        ("Start", Game::new()),
        ("Sparse", load(SPARSE)),
        ("Tangled", load(TANGLED)),
    ];

    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for (name, game) in &positions {
        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            for (from, _) in game.board().pieces_of(Color::White) {
                moves_generated += movegen::valid_moves(game.board(), from).len();
            }
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_moves} moves in {total_time:.3?}");
}

fn load(grid: &str) -> Game {
    let mut game = Game::new();
    game.set_board(Board::from_grid(grid));
    game
}
