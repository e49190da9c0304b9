//! Move simulation: turning instructions into segments.
//!
//! [`Walk`] is one run in progress: the robot's current position and the
//! engine receiving its segments. [`MoveSimulator`] is the user-facing API
//! that validates a [`SimConfig`], picks an engine per run, drives a
//! `Walk` over a move list, and reports the distinct-cell count.
//!
//! # Ownership model
//!
//! A `Walk` owns its engine exclusively and every mutating method takes
//! `&mut self`, so one run is never shared. `MoveSimulator` itself holds
//! only configuration; independent runs started from the same simulator
//! share nothing.

use std::time::Instant;

use sweep_core::{CoverageEngine, CoverageError, Move, Position, Segment};
use sweep_coverage::{Engine, EngineKind, RangeEngine, ReferenceEngine};
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, SimConfig, SimError, ZeroStepPolicy};
use crate::metrics::{RunMetrics, RunReport};

// Compile-time assertion: a simulator and its runs can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<MoveSimulator>();
        assert_send::<Walk<Engine>>();
    }
};

// ── Walk ────────────────────────────────────────────────────────

/// A single run: the robot's position plus the engine it feeds.
///
/// The start cell is ingested on construction, so a walk with no moves
/// already covers one cell.
///
/// # Examples
///
/// ```
/// use sweep_core::{CoverageEngine, Move, Position};
/// use sweep_coverage::RangeEngine;
/// use sweep_engine::{Walk, ZeroStepPolicy};
///
/// let mut walk = Walk::new(Position::ORIGIN, RangeEngine::new()).unwrap();
/// walk.step(0, Move::east(4), ZeroStepPolicy::NoOp).unwrap();
/// walk.step(1, Move::north(4), ZeroStepPolicy::NoOp).unwrap();
/// assert_eq!(walk.position(), Position::new(4, 4));
/// assert_eq!(walk.engine().total(), 9);
/// ```
#[derive(Debug)]
pub struct Walk<E> {
    position: Position,
    engine: E,
    segments: usize,
    path_cells: u64,
}

impl<E: CoverageEngine> Walk<E> {
    /// Start a run at `start`, cleaning the start cell.
    pub fn new(start: Position, mut engine: E) -> Result<Self, CoverageError> {
        let origin = Segment::cell(start);
        engine.ingest(&origin)?;
        Ok(Self {
            position: start,
            engine,
            segments: 1,
            path_cells: 1,
        })
    }

    /// Execute move number `index` and return the segment it swept.
    ///
    /// The segment is anchored at the position before the move; the
    /// position advances only if the engine accepted the segment.
    pub fn step(
        &mut self,
        index: usize,
        mv: Move,
        zero_steps: ZeroStepPolicy,
    ) -> Result<Segment, CoverageError> {
        if mv.steps == 0 && zero_steps == ZeroStepPolicy::Reject {
            return Err(CoverageError::InvalidMove {
                index,
                reason: format!("{} has zero steps", mv.direction),
            });
        }
        let (segment, end) = Segment::swept(self.position, mv)?;
        trace!(index, %segment, "ingesting segment");
        self.engine.ingest(&segment)?;
        self.segments += 1;
        self.path_cells = self.path_cells.saturating_add(segment.len());
        self.position = end;
        Ok(segment)
    }

    /// Current robot position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The engine holding this run's coverage.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Segments ingested so far, including the start cell.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Sum of the lengths of all ingested segments.
    pub fn path_cells(&self) -> u64 {
        self.path_cells
    }

    /// Finish the run and hand back the engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}

// ── MoveSimulator ───────────────────────────────────────────────

/// Computes distinct-cell counts for move sequences.
///
/// # Examples
///
/// ```
/// use sweep_core::{Move, Position};
/// use sweep_engine::{MoveSimulator, SimConfig};
///
/// let sim = MoveSimulator::new(SimConfig::default()).unwrap();
/// let moves = [Move::east(5), Move::west(5)];
/// assert_eq!(sim.run(Position::ORIGIN, &moves).unwrap(), 6);
/// assert_eq!(sim.run(Position::new(10, -3), &[]).unwrap(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MoveSimulator {
    config: SimConfig,
}

impl MoveSimulator {
    /// Create a simulator from a validated configuration.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Count the distinct cells cleaned walking `moves` from `start`.
    pub fn run(&self, start: Position, moves: &[Move]) -> Result<u64, SimError> {
        Ok(self.run_with_report(start, moves)?.distinct_cells)
    }

    /// Like [`run`](Self::run), but also report which engine ran and
    /// how large the run was.
    pub fn run_with_report(&self, start: Position, moves: &[Move]) -> Result<RunReport, SimError> {
        let started = Instant::now();
        let path_cells = path_length(moves);
        let kind = self.config.resolve_engine(path_cells);
        let limit = self.config.reference_cell_limit;

        if kind == EngineKind::Reference && path_cells > limit {
            warn!(path_cells, limit, "refusing reference run over the cell limit");
            return Err(CoverageError::ResourceExhausted {
                cells: path_cells,
                limit,
            }
            .into());
        }

        let engine: Engine = match kind {
            EngineKind::Reference => ReferenceEngine::with_limit(limit).into(),
            EngineKind::Range => RangeEngine::new().into(),
        };
        debug!(%start, moves = moves.len(), engine = %kind, "starting run");

        let mut walk = Walk::new(start, engine)?;
        for (index, mv) in moves.iter().enumerate() {
            walk.step(index, *mv, self.config.zero_steps)?;
        }

        let distinct_cells = walk.engine().total();
        let metrics = RunMetrics {
            moves: moves.len(),
            segments: walk.segments(),
            path_cells: walk.path_cells(),
            duration_us: started.elapsed().as_micros() as u64,
        };
        debug!(
            distinct_cells,
            end = %walk.position(),
            duration_us = metrics.duration_us,
            "run finished"
        );
        Ok(RunReport {
            distinct_cells,
            engine: kind,
            metrics,
        })
    }
}

impl Default for MoveSimulator {
    fn default() -> Self {
        Self {
            config: SimConfig::default(),
        }
    }
}

/// Count distinct cells with the default configuration.
pub fn count_distinct(start: Position, moves: &[Move]) -> Result<u64, SimError> {
    MoveSimulator::default().run(start, moves)
}

/// Cells a walk sweeps counting repetition: the start cell plus
/// `steps + 1` per move.
fn path_length(moves: &[Move]) -> u64 {
    moves
        .iter()
        .fold(1u64, |acc, mv| acc.saturating_add(mv.steps.saturating_add(1)))
}
