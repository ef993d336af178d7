//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p tamerlane_core -- [depth]

use std::env;
use std::time::Instant;

use tamerlane_core::{Game, perft};

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    let game = Game::new();

    println!("Perft from the starting position, depth {depth}");
    for d in 0..=depth {
        let start = Instant::now();
        let nodes = perft(&game, d);
        let elapsed = start.elapsed();
        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        println!("depth {d}: {nodes:>12} nodes in {elapsed:>9.3?} ({nps:.0} nodes/sec)");
    }
}
