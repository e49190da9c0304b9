//! Test utilities and mock types for Sweep development.
//!
//! Provides seeded random walks, proptest strategies for move lists, a
//! [`RecordingEngine`] mock of [`CoverageEngine`], and the standard
//! fixture table in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sweep_core::{CoverageEngine, CoverageError, Direction, Move, Segment};

pub use fixtures::{Fixture, FIXTURES};

/// Build a move list from `(direction name, steps)` pairs.
///
/// # Panics
///
/// Panics on an unknown direction name; fixtures are expected to be valid.
pub fn moves(spec: &[(&str, u64)]) -> Vec<Move> {
    spec.iter()
        .map(|&(name, steps)| {
            let direction: Direction = name
                .parse()
                .unwrap_or_else(|e| panic!("bad fixture direction: {e}"));
            Move::new(direction, steps)
        })
        .collect()
}

/// Deterministic random walk of `len` moves with `1..=max_steps` steps each.
///
/// The same seed always yields the same walk.
pub fn random_walk(seed: u64, len: usize, max_steps: u64) -> Vec<Move> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            let direction = Direction::ALL[rng.gen_range(0..4)];
            Move::new(direction, rng.gen_range(1..=max_steps.max(1)))
        })
        .collect()
}

/// Random walk that keeps turning back on itself, producing many crossings
/// and revisits. Each move is perpendicular to or the reverse of the last.
pub fn tangled_walk(seed: u64, len: usize, max_steps: u64) -> Vec<Move> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut direction = Direction::North;
    let mut walk = Vec::with_capacity(len);
    for _ in 0..len {
        direction = match rng.gen_range(0..3) {
            0 => direction.opposite(),
            1 => Direction::ALL[(direction as usize + 1) % 4],
            _ => Direction::ALL[(direction as usize + 3) % 4],
        };
        walk.push(Move::new(direction, rng.gen_range(1..=max_steps.max(1))));
    }
    walk
}

/// Strategy for a single direction.
pub fn arb_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::North),
        Just(Direction::East),
        Just(Direction::South),
        Just(Direction::West),
    ]
}

/// Strategy for move lists small enough for the reference engine.
pub fn arb_moves(max_len: usize, max_steps: u64) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(
        (arb_direction(), 0..=max_steps).prop_map(|(d, s)| Move::new(d, s)),
        0..=max_len,
    )
}

/// Wraps an engine and records every segment it receives.
///
/// Useful for checking what the simulator hands to its engine without
/// depending on how the engine stores coverage.
#[derive(Debug, Default)]
pub struct RecordingEngine<E> {
    pub inner: E,
    pub segments: Vec<Segment>,
}

impl<E> RecordingEngine<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            segments: Vec::new(),
        }
    }
}

impl<E: CoverageEngine> CoverageEngine for RecordingEngine<E> {
    fn ingest(&mut self, segment: &Segment) -> Result<(), CoverageError> {
        self.segments.push(*segment);
        self.inner.ingest(segment)
    }

    fn total(&self) -> u64 {
        self.inner.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_walk_is_deterministic() {
        assert_eq!(random_walk(42, 50, 9), random_walk(42, 50, 9));
        assert_ne!(random_walk(42, 50, 9), random_walk(43, 50, 9));
    }

    #[test]
    fn random_walk_respects_bounds() {
        let walk = random_walk(7, 200, 5);
        assert_eq!(walk.len(), 200);
        assert!(walk.iter().all(|m| (1..=5).contains(&m.steps)));
    }

    #[test]
    fn tangled_walk_never_repeats_direction() {
        let walk = tangled_walk(3, 100, 4);
        assert!(walk.windows(2).all(|w| w[0].direction != w[1].direction));
    }

    #[test]
    fn moves_parses_names() {
        assert_eq!(
            moves(&[("north", 1), ("West", 2)]),
            vec![Move::north(1), Move::west(2)]
        );
    }
}
