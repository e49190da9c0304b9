//! Benchmark profiles and utilities for the Sweep coverage counter.
//!
//! Provides deterministic move lists for benchmarking and examples:
//!
//! - [`short_walk_profile`]: 1K random moves of at most 20 steps (reference-sized)
//! - [`long_walk_profile`]: 1K random moves of up to 10^8 steps (range engine only)
//! - [`lawnmower`]: back-and-forth rows joined by short hops, the path a
//!   methodical cleaner takes
//! - [`crosshatch`]: long rows and columns crossing each other, the worst
//!   case for row/column reconciliation

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sweep_core::{Direction, Move};

/// 1K random moves with `1..=20` steps each.
pub fn short_walk_profile(seed: u64) -> Vec<Move> {
    random_walk(seed, 1_000, 20)
}

/// 1K random moves with `1..=10^8` steps each.
pub fn long_walk_profile(seed: u64) -> Vec<Move> {
    random_walk(seed, 1_000, 100_000_000)
}

/// Sweep `rows` rows of `width` cells, moving north one cell between rows.
///
/// Covers exactly `rows * (width + 1)` cells.
pub fn lawnmower(rows: u64, width: u64) -> Vec<Move> {
    let mut moves = Vec::with_capacity(2 * rows as usize);
    for row in 0..rows {
        let dir = if row % 2 == 0 {
            Direction::East
        } else {
            Direction::West
        };
        moves.push(Move::new(dir, width));
        if row + 1 < rows {
            moves.push(Move::north(1));
        }
    }
    moves
}

/// `lines` horizontal passes followed by `lines` vertical passes over a
/// `span x span` box, spaced `span / lines` apart.
pub fn crosshatch(lines: u64, span: u64) -> Vec<Move> {
    let gap = (span / lines.max(1)).max(1);
    let mut moves = Vec::with_capacity(4 * lines as usize);
    for i in 0..lines {
        let dir = if i % 2 == 0 {
            Direction::East
        } else {
            Direction::West
        };
        moves.push(Move::new(dir, span));
        moves.push(Move::north(gap));
    }
    for i in 0..lines {
        let dir = if i % 2 == 0 {
            Direction::South
        } else {
            Direction::North
        };
        moves.push(Move::new(dir, gap * lines));
        moves.push(Move::west(gap));
    }
    moves
}

fn random_walk(seed: u64, len: usize, max_steps: u64) -> Vec<Move> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let direction = Direction::ALL[rng.gen_range(0..4)];
            Move::new(direction, rng.gen_range(1..=max_steps))
        })
        .collect()
}
